//! Converts a black & white raster image into a C++ `std::uint8_t` array
//! literal, packed one bit per pixel.

pub mod emit;
pub mod error;
pub mod hex;
pub mod load;
pub mod pack;

pub use error::{Error, Result};
