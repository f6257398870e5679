//! Shared test utilities: synthetic image fixtures.
//!
//! Real camera files are too heavy to ship as fixtures, so tests build
//! their own: plain JPEGs via the `image` encoder, and JPEGs with a
//! handcrafted EXIF APP1 segment when a test needs an orientation tag.

use std::io::Cursor;
use std::path::Path;

/// Encode a small gradient JPEG in memory.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut Cursor::new(&mut buf))
        .encode_image(&img)
        .unwrap();
    buf
}

/// Write a gradient JPEG of the given dimensions to disk.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, jpeg_bytes(width, height)).unwrap();
}

/// Minimal EXIF APP1 payload: TIFF header (little-endian) plus a single
/// IFD0 entry carrying the orientation tag (0x0112, SHORT).
fn exif_app1_payload(orientation: u16) -> Vec<u8> {
    let mut p = Vec::new();
    p.extend_from_slice(b"Exif\0\0");
    p.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00]); // "II", magic 42
    p.extend_from_slice(&8u32.to_le_bytes()); // IFD0 offset
    p.extend_from_slice(&1u16.to_le_bytes()); // one entry
    p.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
    p.extend_from_slice(&3u16.to_le_bytes()); // type SHORT
    p.extend_from_slice(&1u32.to_le_bytes()); // count
    p.extend_from_slice(&orientation.to_le_bytes());
    p.extend_from_slice(&[0, 0]); // value field padding
    p.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
    p
}

/// A gradient JPEG whose EXIF declares the given orientation (1–8, or
/// anything — validation is the code under test's problem).
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let plain = jpeg_bytes(width, height);
    let payload = exif_app1_payload(orientation);

    // Splice the APP1 right after SOI; decoders skip it, EXIF readers find it
    let mut out = Vec::with_capacity(plain.len() + payload.len() + 4);
    out.extend_from_slice(&plain[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&((payload.len() as u16 + 2).to_be_bytes()));
    out.extend_from_slice(&payload);
    out.extend_from_slice(&plain[2..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::read_orientation;

    #[test]
    fn synthetic_jpeg_decodes_to_requested_dimensions() {
        let img = image::load_from_memory(&jpeg_bytes(64, 48)).unwrap();
        assert_eq!((img.width(), img.height()), (64, 48));
    }

    #[test]
    fn orientation_fixture_roundtrips_through_exif_reader() {
        let tmp = tempfile::TempDir::new().unwrap();
        for tag in [1u16, 3, 6, 8] {
            let path = tmp.path().join(format!("o{tag}.jpg"));
            std::fs::write(&path, jpeg_with_orientation(32, 24, tag)).unwrap();
            assert_eq!(read_orientation(&path), Some(tag as u32), "tag {tag}");
        }
    }

    #[test]
    fn orientation_fixture_still_decodes_as_jpeg() {
        let bytes = jpeg_with_orientation(32, 24, 6);
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (32, 24));
    }
}
