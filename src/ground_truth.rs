use crate::dataset::{Label, Rectangle};
use crate::error::IcdarError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const COORDINATES_COUNT: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Space,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
        }
    }
}

/// Reads a ground truth file, one rectangle per non-empty line.
pub fn read_label<P: AsRef<Path>>(file_path: P, delimiter: Delimiter) -> Result<Label, IcdarError> {
    let path = file_path.as_ref();
    let file = File::open(path).map_err(|source| IcdarError::LabelOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    parse_label(BufReader::new(file), delimiter, path)
}

pub fn parse_label<R: BufRead>(
    reader: R,
    delimiter: Delimiter,
    path: &Path,
) -> Result<Label, IcdarError> {
    let mut rectangles = Vec::new();
    for (pos, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| IcdarError::LabelReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let rectangle =
            parse_line(&line, delimiter).map_err(|reason| IcdarError::LabelParseFailed {
                path: path.to_path_buf(),
                line_number: pos + 1,
                line: line.clone(),
                reason,
            })?;
        rectangles.push(rectangle);
    }

    Ok(Label { rectangles })
}

/// Parses a single `left<d>top<d>right<d>bottom<d>text` row.
///
/// The character right after the fourth delimiter is skipped, the text runs
/// from there to the end of the line. For `10,20,110,50,"hello"` that drops
/// the opening quote, for `10, 20, 110, 50, "hello"` the space before it.
///
/// With `Delimiter::Space` a run of spaces before a coordinate counts as a
/// single delimiter. The delimiter after `bottom` is always one character.
pub fn parse_line(line: &str, delimiter: Delimiter) -> Result<Rectangle, String> {
    let separator = delimiter.as_char();
    let mut rest = Some(line);
    let mut coordinates = [0usize; COORDINATES_COUNT];
    for (pos, value) in coordinates.iter_mut().enumerate() {
        let mut remaining = rest.ok_or_else(|| {
            format!(
                "expected {} delimited coordinates, found {}",
                COORDINATES_COUNT, pos
            )
        })?;
        if delimiter == Delimiter::Space {
            remaining = remaining.trim_start_matches(separator);
        }
        let mut parts = remaining.splitn(2, separator);
        let field = parts.next().unwrap_or_default();
        rest = parts.next();
        *value = field
            .trim()
            .parse()
            .map_err(|e| format!("coordinate {} {:?}: {}", pos + 1, field, e))?;
    }
    let text = match rest {
        Some(rest) => rest.chars().skip(1).collect(),
        None => {
            return Err(format!(
                "expected {} delimited coordinates followed by text",
                COORDINATES_COUNT
            ))
        }
    };
    let [left, top, right, bottom] = coordinates;

    Ok(Rectangle {
        left,
        top,
        right,
        bottom,
        text,
    })
}
