//! Codec trait and shared types.
//!
//! The [`ImageCodec`] trait is the seam between the per-file policy
//! (which decides *when* to decode, rewrite, and recompress) and the
//! pixel work (which knows *how*). The policy layer never touches codec
//! internals, so tests can drive the two-stage write logic with a mock
//! that fabricates encoded sizes.
//!
//! The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec), built on the `image`
//! crate's pure-Rust decoders and encoders.

use crate::params::Quality;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// A decoded pixel buffer plus the orientation tag that came with it.
///
/// The buffer is owned by whichever pipeline stage currently holds it;
/// every transform consumes it and hands back a new one.
pub struct Decoded {
    pub image: DynamicImage,
    /// EXIF orientation (1–8) if the container carried a readable one.
    pub orientation: Option<u32>,
}

/// Trait for image codecs.
///
/// Three operations cover everything the pipeline needs: decode a file,
/// re-encode losslessly (BMP, the neutral intermediate), and re-encode
/// as quality-controlled JPEG for the second write-stage.
pub trait ImageCodec: Sync {
    /// Decode a file into a pixel buffer, picking up its orientation tag.
    fn decode(&self, path: &Path) -> Result<Decoded, CodecError>;

    /// Encode losslessly as BMP bytes.
    fn encode_lossless(&self, image: &DynamicImage) -> Result<Vec<u8>, CodecError>;

    /// Encode as JPEG at the given quality factor.
    fn encode_jpeg(&self, image: &DynamicImage, quality: Quality) -> Result<Vec<u8>, CodecError>;
}
