use crate::dataset::{Image, PixelRgb};
use crate::error::IcdarError;
use image::io::Reader;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

/// Decodes the image at `file_path` into an RGB buffer of the same dimensions.
///
/// The format is guessed from the file content, so the extension is only a
/// naming convention. Channels past the third (alpha) are dropped, grey
/// images get the luma value copied into all three channels.
pub fn read_image<P: AsRef<Path>>(file_path: P) -> Result<Image, IcdarError> {
    let path = file_path.as_ref();
    let instant = Instant::now();
    let file = File::open(path).map_err(|source| IcdarError::ImageOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_failed = |source: image::ImageError| IcdarError::ImageDecodeFailed {
        path: path.to_path_buf(),
        source,
    };
    let decoded = Reader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| decode_failed(e.into()))?
        .decode()
        .map_err(decode_failed)?;

    let rgb_image = decoded.into_rgb();
    let (width, height) = rgb_image.dimensions();
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in rgb_image.rows() {
        pixels.extend(row.map(|sample| PixelRgb {
            r: sample[0],
            g: sample[1],
            b: sample[2],
        }));
    }
    debug!(
        "decoded {} ({}x{}) in {} ms",
        path.display(),
        width,
        height,
        instant.elapsed().as_millis()
    );

    // every scanline holds exactly `width` samples
    Image::from_pixels(width, height, pixels).ok_or_else(|| IcdarError::ImageDecodeFailed {
        path: path.to_path_buf(),
        source: image::ImageError::Limits(image::error::LimitError::from_kind(
            image::error::LimitErrorKind::DimensionError,
        )),
    })
}
