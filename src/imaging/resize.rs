//! Orientation-aware resize onto a centered white canvas.
//!
//! The one public operation, [`resize_to_height`], is the heart of the
//! pipeline: it corrects orientation, contain-fits the image to a
//! `floor(target_height * aspect) × target_height` box, and composites the
//! scaled result centered on a white canvas of exactly that size. Images
//! already within the height budget pass through untouched.

use super::calculations::{canvas_width, center_offsets, fit_dimensions};
use super::orientation::Transform;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("Degenerate aspect ratio: {width}x{height} yields a zero-width canvas at height {target_height}")]
    DegenerateAspect {
        width: u32,
        height: u32,
        target_height: u32,
    },
}

/// Shrink `img` so it fits a canvas `target_height` tall, aspect-preserving
/// and centered on white.
///
/// - Images with `height <= target_height` are returned unchanged — the
///   same buffer, no canvas, no orientation correction. The height check
///   reads the stored pixel grid, so a sideways-stored portrait whose
///   stored height is already small enough stays as-is.
/// - Otherwise the orientation transform is applied *before* any aspect
///   math, since a 90°/270° rotation swaps width and height.
/// - Scaling uses bicubic interpolation ([`FilterType::CatmullRom`]).
/// - The canvas keeps the source's channel layout: alpha sources get an
///   opaque-white RGBA canvas, everything else RGB.
///
/// Consumes the input buffer; the returned image is the only copy left.
pub fn resize_to_height(
    img: DynamicImage,
    orientation: Option<u32>,
    target_height: u32,
) -> Result<DynamicImage, ResizeError> {
    if img.height() <= target_height {
        return Ok(img);
    }

    let img = Transform::from_tag(orientation).apply(img);
    let (width, height) = (img.width(), img.height());

    let canvas_w = canvas_width(width, height, target_height);
    if canvas_w == 0 {
        return Err(ResizeError::DegenerateAspect {
            width,
            height,
            target_height,
        });
    }

    let (scaled_w, scaled_h) = fit_dimensions(width, height, target_height, canvas_w);
    let (offset_x, offset_y) = center_offsets((canvas_w, target_height), (scaled_w, scaled_h));

    log::debug!(
        "{width}x{height} -> {scaled_w}x{scaled_h} on {canvas_w}x{target_height} at +{offset_x}+{offset_y}"
    );

    let scaled = img.resize_exact(scaled_w, scaled_h, FilterType::CatmullRom);

    let canvas = if img.color().has_alpha() {
        let mut canvas = RgbaImage::from_pixel(canvas_w, target_height, Rgba([255, 255, 255, 255]));
        imageops::overlay(&mut canvas, &scaled.to_rgba8(), offset_x as i64, offset_y as i64);
        DynamicImage::ImageRgba8(canvas)
    } else {
        let mut canvas = RgbImage::from_pixel(canvas_w, target_height, Rgb([255, 255, 255]));
        imageops::overlay(&mut canvas, &scaled.to_rgb8(), offset_x as i64, offset_y as i64);
        DynamicImage::ImageRgb8(canvas)
    };

    Ok(canvas)
}
