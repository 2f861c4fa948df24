use crate::ground_truth::Delimiter;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

lazy_static! {
    pub static ref ICDAR_2013: DatasetLayout = DatasetLayout {
        training: SplitLayout {
            image_prefix: String::new(),
            image_extension: "jpg".to_string(),
            label_prefix: "gt_".to_string(),
            label_extension: "txt".to_string(),
            first_index: 100,
            last_index: 328,
            delimiter: Delimiter::Space,
        },
        test: SplitLayout {
            image_prefix: "img_".to_string(),
            image_extension: "jpg".to_string(),
            label_prefix: "gt_img_".to_string(),
            label_extension: "txt".to_string(),
            first_index: 1,
            last_index: 233,
            delimiter: Delimiter::Comma,
        },
    };
}

/// Naming convention and index range of the files in one split directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLayout {
    #[serde(default)]
    pub image_prefix: String,
    pub image_extension: String,
    #[serde(default)]
    pub label_prefix: String,
    #[serde(default = "default_label_extension")]
    pub label_extension: String,
    pub first_index: usize,
    /// Inclusive.
    pub last_index: usize,
    pub delimiter: Delimiter,
}

fn default_label_extension() -> String {
    "txt".to_string()
}

impl SplitLayout {
    /// Number of indices in the range, `None` when it doesn't fit in a `usize`
    /// (`0..=usize::MAX`).
    pub fn checked_len(&self) -> Option<usize> {
        if self.last_index < self.first_index {
            Some(0)
        } else {
            (self.last_index - self.first_index).checked_add(1)
        }
    }

    /// Saturates at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many indices a read with `limit` visits (0 for the whole range).
    pub fn count(&self, limit: usize) -> usize {
        if limit == 0 {
            self.len()
        } else {
            self.len().min(limit)
        }
    }

    /// First `count(limit)` indices of the range.
    pub fn indices(&self, limit: usize) -> RangeInclusive<usize> {
        match self.count(limit) {
            // first + count - 1 never passes last_index
            0 => RangeInclusive::new(1, 0),
            count => self.first_index..=self.first_index + (count - 1),
        }
    }

    pub fn image_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!(
            "{}{}.{}",
            self.image_prefix, index, self.image_extension
        ))
    }

    pub fn label_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(format!(
            "{}{}.{}",
            self.label_prefix, index, self.label_extension
        ))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetLayout {
    pub training: SplitLayout,
    pub test: SplitLayout,
}

impl DatasetLayout {
    pub fn icdar_2013() -> DatasetLayout {
        ICDAR_2013.clone()
    }

    pub fn from_json_file<P: AsRef<Path>>(file_path: P) -> Result<DatasetLayout> {
        let path = file_path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Could not open layout file {}", path.display()))?;
        let layout: DatasetLayout = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid layout file {}", path.display()))?;
        for (name, split) in [("training", &layout.training), ("test", &layout.test)].iter() {
            match split.checked_len() {
                Some(0) => {
                    return Err(anyhow!(
                        "{} split in {} has an empty index range {}..={}",
                        name,
                        path.display(),
                        split.first_index,
                        split.last_index
                    ))
                }
                None => {
                    return Err(anyhow!(
                        "{} split in {} has an index range {}..={} too large to count",
                        name,
                        path.display(),
                        split.first_index,
                        split.last_index
                    ))
                }
                Some(_) => {}
            }
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn icdar_2013_file_names() {
        let layout = DatasetLayout::icdar_2013();
        let dir = Path::new("data/train");
        assert_eq!(
            layout.training.image_path(dir, 100),
            Path::new("data/train/100.jpg")
        );
        assert_eq!(
            layout.training.label_path(dir, 100),
            Path::new("data/train/gt_100.txt")
        );
        let dir = Path::new("data/test");
        assert_eq!(
            layout.test.image_path(dir, 7),
            Path::new("data/test/img_7.jpg")
        );
        assert_eq!(
            layout.test.label_path(dir, 7),
            Path::new("data/test/gt_img_7.txt")
        );
        assert_eq!(layout.training.len(), 229);
        assert_eq!(layout.test.len(), 233);
    }

    #[test]
    fn indices_respect_limit() {
        let split = &ICDAR_2013.training;
        assert_eq!(split.indices(0), 100..=328);
        assert_eq!(split.indices(2), 100..=101);
        assert_eq!(split.indices(1000), 100..=328);
        assert_eq!(split.count(1000), 229);
    }

    #[test]
    fn reversed_range_is_empty() {
        let mut split = ICDAR_2013.test.clone();
        split.first_index = 5;
        split.last_index = 4;
        assert!(split.is_empty());
        assert_eq!(split.count(0), 0);
        assert_eq!(split.indices(0).count(), 0);
    }

    #[test]
    fn range_ending_at_usize_max() {
        let mut split = ICDAR_2013.test.clone();
        split.first_index = 0;
        split.last_index = usize::MAX;
        assert_eq!(split.checked_len(), None);
        assert_eq!(split.len(), usize::MAX);
        assert_eq!(split.indices(2), 0..=1);
        assert_eq!(*split.indices(0).end(), usize::MAX - 1);

        split.first_index = usize::MAX - 1;
        assert_eq!(split.checked_len(), Some(2));
        assert_eq!(split.indices(0), usize::MAX - 1..=usize::MAX);
        assert_eq!(split.indices(0).count(), 2);
    }

    #[test]
    fn layout_with_uncountable_range_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("layout.json");
        let mut layout = DatasetLayout::icdar_2013();
        layout.training.first_index = 0;
        layout.training.last_index = usize::MAX;
        fs::write(&path, serde_json::to_string(&layout)?)?;
        let err = DatasetLayout::from_json_file(&path).unwrap_err();
        assert!(err.to_string().contains("too large"));

        layout.training.first_index = 1;
        fs::write(&path, serde_json::to_string(&layout)?)?;
        assert_eq!(
            DatasetLayout::from_json_file(&path)?.training.len(),
            usize::MAX
        );
        Ok(())
    }

    #[test]
    fn layout_from_json() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("layout.json");
        fs::write(
            &path,
            r#"{
                "training": {
                    "image_prefix": "train_",
                    "image_extension": "png",
                    "label_prefix": "gt_train_",
                    "first_index": 0,
                    "last_index": 9,
                    "delimiter": "comma"
                },
                "test": {
                    "image_extension": "jpg",
                    "label_prefix": "gt_",
                    "label_extension": "gt",
                    "first_index": 1,
                    "last_index": 3,
                    "delimiter": "space"
                }
            }"#,
        )?;
        let layout = DatasetLayout::from_json_file(&path)?;
        assert_eq!(layout.training.label_extension, "txt");
        assert_eq!(layout.training.delimiter, Delimiter::Comma);
        assert_eq!(
            layout.training.image_path(Path::new("d"), 3),
            Path::new("d/train_3.png")
        );
        assert_eq!(
            layout.test.image_path(Path::new("d"), 3),
            Path::new("d/3.jpg")
        );
        assert_eq!(
            layout.test.label_path(Path::new("d"), 3),
            Path::new("d/gt_3.gt")
        );
        Ok(())
    }

    #[test]
    fn layout_with_empty_range_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("layout.json");
        let mut layout = DatasetLayout::icdar_2013();
        layout.test.last_index = 0;
        fs::write(&path, serde_json::to_string(&layout)?)?;
        assert!(DatasetLayout::from_json_file(&path).is_err());
        Ok(())
    }
}
