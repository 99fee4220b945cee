use std::path::Path;

use image::{ImageError, ImageReader, RgbImage};
use log::info;

use crate::{Error, Result};

/// Decode the image at `path`, dropping any alpha channel.
///
/// The format is sniffed from the file contents, falling back to the
/// extension, so a PNG named `logo.bin` still loads.
pub fn load(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_owned(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?;
    let format = reader.format();
    let img = reader.decode().map_err(decode_err)?;

    info!(
        "decoded {} ({format:?}, {}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color(),
    );

    Ok(img.into_rgb8())
}
