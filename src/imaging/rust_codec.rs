//! Pure Rust codec — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, BMP) | `image` crate (pure Rust decoders) |
//! | Orientation tag | `kamadak-exif` container reader |
//! | Encode → BMP | `image::ImageFormat::Bmp` (lossless intermediate) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at caller quality |

use super::codec::{CodecError, Decoded, ImageCodec};
use super::orientation::read_orientation;
use crate::params::Quality;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Codec built on the `image` crate ecosystem.
///
/// Carries no state: decoders and encoders are per-call, so instances
/// can be shared freely across threads without any locking.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for RustCodec {
    fn decode(&self, path: &Path) -> Result<Decoded, CodecError> {
        let image = ImageReader::open(path)
            .map_err(CodecError::Io)?
            .decode()
            .map_err(|e| {
                CodecError::Decode(format!("Failed to decode {}: {}", path.display(), e))
            })?;

        // Second pass over the container; absent or corrupt EXIF is None
        let orientation = read_orientation(path);

        Ok(Decoded { image, orientation })
    }

    fn encode_lossless(&self, image: &DynamicImage) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Bmp)
            .map_err(|e| CodecError::Encode(format!("BMP encode failed: {}", e)))?;
        Ok(buf)
    }

    fn encode_jpeg(&self, image: &DynamicImage, quality: Quality) -> Result<Vec<u8>, CodecError> {
        // JPEG carries no alpha; flatten to RGB before encoding
        let rgb = image.to_rgb8();
        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality.value() as u8);
        rgb.write_with_encoder(encoder)
            .map_err(|e| CodecError::Encode(format!("JPEG encode failed: {}", e)))?;
        Ok(buf)
    }
}
