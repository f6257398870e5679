//! EXIF orientation resolution.
//!
//! Cameras store portrait shots as landscape pixel grids plus an
//! orientation tag (1–8) describing the rotate/flip needed to display
//! them upright. [`Transform`] is the eight-way mapping of that tag;
//! [`read_orientation`] extracts the tag from a file's container
//! metadata.
//!
//! Missing or unreadable metadata is a first-class outcome here, not a
//! swallowed error: [`read_orientation`] returns `None` on any EXIF
//! parse failure and logs it at debug level, and `Transform::from_tag`
//! maps `None` (and any out-of-range value) to [`Transform::Identity`].

use image::DynamicImage;
use std::io::BufReader;
use std::path::Path;

/// One of the eight rotate/flip operations an EXIF orientation tag can
/// request. Compound variants rotate first, then mirror horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    FlipHorizontal,
    Rotate180,
    Rotate180FlipHorizontal,
    Rotate90FlipHorizontal,
    Rotate90,
    Rotate270FlipHorizontal,
    Rotate270,
}

impl Transform {
    /// Map an EXIF orientation tag to its correction transform.
    ///
    /// Total over all inputs: tags outside 1–8 and absent tags yield
    /// [`Transform::Identity`].
    pub fn from_tag(tag: Option<u32>) -> Self {
        match tag {
            Some(1) => Transform::Identity,
            Some(2) => Transform::FlipHorizontal,
            Some(3) => Transform::Rotate180,
            Some(4) => Transform::Rotate180FlipHorizontal,
            Some(5) => Transform::Rotate90FlipHorizontal,
            Some(6) => Transform::Rotate90,
            Some(7) => Transform::Rotate270FlipHorizontal,
            Some(8) => Transform::Rotate270,
            _ => Transform::Identity,
        }
    }

    /// Apply the transform, consuming the buffer. Rotations by 90°/270°
    /// swap width and height.
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Transform::Identity => img,
            Transform::FlipHorizontal => img.fliph(),
            Transform::Rotate180 => img.rotate180(),
            Transform::Rotate180FlipHorizontal => img.rotate180().fliph(),
            Transform::Rotate90FlipHorizontal => img.rotate90().fliph(),
            Transform::Rotate90 => img.rotate90(),
            Transform::Rotate270FlipHorizontal => img.rotate270().fliph(),
            Transform::Rotate270 => img.rotate270(),
        }
    }

    /// Whether this transform leaves the pixel grid untouched.
    pub fn is_identity(self) -> bool {
        self == Transform::Identity
    }
}

/// Read the EXIF orientation tag from a file, if there is one.
///
/// Returns `None` for files without EXIF (BMPs, stripped JPEGs), for
/// corrupt metadata, and for orientation fields holding a non-integer
/// value. The distinction is logged but deliberately not surfaced: a
/// photo with broken metadata still gets processed, upright-as-stored.
pub fn read_orientation(path: &Path) -> Option<u32> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("cannot reopen {} for metadata: {e}", path.display());
            return None;
        }
    };

    match exif::Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(meta) => meta
            .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0)),
        Err(e) => {
            // Absent or unreadable metadata: the tolerated branch
            log::debug!("no readable EXIF in {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn tag_mapping_matches_exif_convention() {
        assert_eq!(Transform::from_tag(Some(1)), Transform::Identity);
        assert_eq!(Transform::from_tag(Some(2)), Transform::FlipHorizontal);
        assert_eq!(Transform::from_tag(Some(3)), Transform::Rotate180);
        assert_eq!(
            Transform::from_tag(Some(4)),
            Transform::Rotate180FlipHorizontal
        );
        assert_eq!(
            Transform::from_tag(Some(5)),
            Transform::Rotate90FlipHorizontal
        );
        assert_eq!(Transform::from_tag(Some(6)), Transform::Rotate90);
        assert_eq!(
            Transform::from_tag(Some(7)),
            Transform::Rotate270FlipHorizontal
        );
        assert_eq!(Transform::from_tag(Some(8)), Transform::Rotate270);
    }

    #[test]
    fn out_of_range_tags_are_identity() {
        assert_eq!(Transform::from_tag(Some(0)), Transform::Identity);
        assert_eq!(Transform::from_tag(Some(9)), Transform::Identity);
        assert_eq!(Transform::from_tag(Some(u32::MAX)), Transform::Identity);
        assert_eq!(Transform::from_tag(None), Transform::Identity);
    }

    #[test]
    fn rotations_swap_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(30, 40));
        for transform in [
            Transform::Rotate90,
            Transform::Rotate270,
            Transform::Rotate90FlipHorizontal,
            Transform::Rotate270FlipHorizontal,
        ] {
            let out = transform.apply(img.clone());
            assert_eq!((out.width(), out.height()), (40, 30), "{transform:?}");
        }
    }

    #[test]
    fn flips_and_half_turns_keep_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(30, 40));
        for transform in [
            Transform::Identity,
            Transform::FlipHorizontal,
            Transform::Rotate180,
            Transform::Rotate180FlipHorizontal,
        ] {
            let out = transform.apply(img.clone());
            assert_eq!((out.width(), out.height()), (30, 40), "{transform:?}");
        }
    }

    #[test]
    fn rotate90_moves_top_left_to_top_right() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        let out = Transform::Rotate90.apply(DynamicImage::ImageRgb8(img));
        assert_eq!(out.to_rgb8().get_pixel(1, 0), &image::Rgb([255, 0, 0]));
    }

    #[test]
    fn identity_is_identity() {
        assert!(Transform::Identity.is_identity());
        assert!(!Transform::Rotate90.is_identity());
    }

    #[test]
    fn read_orientation_nonexistent_file_is_none() {
        assert_eq!(read_orientation(Path::new("/nonexistent/image.jpg")), None);
    }
}
