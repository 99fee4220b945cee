use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "invalid image size {width}x{height}: \
         width must be a positive multiple of 8 and height must be positive"
    )]
    InvalidDimension { width: u32, height: u32 },

    /// `rgb` is the pixel's color with alpha already discarded.
    #[error("pixel at ({x}, {y}) is #{rgb:06X}, not black or white")]
    InvalidPixel { x: u32, y: u32, rgb: u32 },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
