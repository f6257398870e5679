//! Image transform pipeline — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Orientation** | `kamadak-exif` tag read + `image` rotate/flip ops |
//! | **Fit math** | pure functions (unit testable, no I/O) |
//! | **Resize → canvas** | bicubic (`CatmullRom`) + centered composite |
//! | **Encode** | BMP (lossless) and JPEG (quality-controlled) |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math for the contain-fit canvas
//! - **Orientation**: EXIF tag → [`Transform`] mapping and application
//! - **Resize**: the orientation-aware resize-and-center operation
//! - **Codec**: [`ImageCodec`] trait + [`RustCodec`]

pub mod codec;
mod calculations;
pub mod orientation;
mod resize;
pub mod rust_codec;

pub use calculations::{canvas_width, center_offsets, fit_dimensions};
pub use codec::{CodecError, Decoded, ImageCodec};
pub use orientation::{Transform, read_orientation};
pub use resize::{ResizeError, resize_to_height};
pub use rust_codec::RustCodec;
