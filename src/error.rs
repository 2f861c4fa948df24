use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IcdarError {
    #[error("could not open image {path:?}: {source}")]
    ImageOpenFailed { path: PathBuf, source: io::Error },
    #[error("could not decode image {path:?}: {source}")]
    ImageDecodeFailed {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("could not open label file {path:?}: {source}")]
    LabelOpenFailed { path: PathBuf, source: io::Error },
    #[error("could not read label file {path:?}: {source}")]
    LabelReadFailed { path: PathBuf, source: io::Error },
    #[error("invalid line {line_number} in label file {path:?} ({reason}): {line:?}")]
    LabelParseFailed {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },
}

impl IcdarError {
    /// Open failures mark the end of a split rather than a broken dataset.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            IcdarError::ImageOpenFailed { .. } | IcdarError::LabelOpenFailed { .. }
        )
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            IcdarError::ImageOpenFailed { path, .. }
            | IcdarError::ImageDecodeFailed { path, .. }
            | IcdarError::LabelOpenFailed { path, .. }
            | IcdarError::LabelReadFailed { path, .. }
            | IcdarError::LabelParseFailed { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_open_failures_count_as_missing() {
        let open = IcdarError::LabelOpenFailed {
            path: PathBuf::from("gt_1.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(open.is_missing_file());

        let parse = IcdarError::LabelParseFailed {
            path: PathBuf::from("gt_1.txt"),
            line_number: 3,
            line: "1,2,3".to_string(),
            reason: "expected 4 numeric fields".to_string(),
        };
        assert!(!parse.is_missing_file());
        assert_eq!(parse.path(), &PathBuf::from("gt_1.txt"));
        let message = parse.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("gt_1.txt"));
    }
}
