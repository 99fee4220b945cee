use image::{Rgb, RgbImage};
use log::debug;

use crate::{Error, Result};

const BLACK: u32 = 0x000000;
const WHITE: u32 = 0xffffff;

/// Pack a black & white image into 1 bit per pixel.
///
/// Pixels are taken in row-major order, 8 per byte, least significant bit
/// first. Black is 1, white is 0. Since the width is a multiple of 8, each row
/// starts on a fresh byte.
pub fn pack(img: &RgbImage) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    if width == 0 || width % 8 != 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }

    let mut bytes = vec![0u8; width as usize / 8 * height as usize];
    for (x, y, &pixel) in img.enumerate_pixels() {
        let black = match rgb24(pixel) {
            BLACK => true,
            WHITE => false,
            rgb => return Err(Error::InvalidPixel { x, y, rgb }),
        };

        let i = y as usize * width as usize + x as usize;
        bytes[i / 8] |= u8::from(black) << (i % 8);
    }

    debug!("packed {width}x{height} pixels into {} bytes", bytes.len());
    Ok(bytes)
}

/// Read pixel `(x, y)` back out of a buffer produced by [`pack`].
///
/// # Panics
///
/// If `(x, y)` lies past the end of `bytes`.
pub fn pixel_is_black(bytes: &[u8], width: u32, x: u32, y: u32) -> bool {
    let i = y as usize * width as usize + x as usize;
    (bytes[i / 8] >> (i % 8)) & 1 == 1
}

/// ASCII dump of a packed buffer, `#` for black and `.` for white.
///
/// # Panics
///
/// If `width` is zero.
pub fn preview(bytes: &[u8], width: u32) -> String {
    let height = bytes.len() as u32 * 8 / width;
    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for y in 0..height {
        for x in 0..width {
            out.push(if pixel_is_black(bytes, width, x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

fn rgb24(Rgb([r, g, b]): Rgb<u8>) -> u32 {
    u32::from_be_bytes([0, r, g, b])
}
