//! Pure calculation functions for the contain-fit canvas geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//! Dimension math deliberately mirrors the on-disk behavior of the tool:
//! aspect ratios are computed in `f64` and every pixel dimension is
//! truncated (floor), not rounded.

/// Canvas width for a given source and target height.
///
/// The canvas is always `canvas_width(..) × target_height`; the scaled
/// image is centered on it. Width is `floor(target_height * aspect)`.
///
/// # Examples
/// ```
/// # use imgsquash::imaging::canvas_width;
/// // 4:3 landscape fit to height 1000 → 1333-wide canvas
/// assert_eq!(canvas_width(4000, 3000, 1000), 1333);
///
/// // 3:4 portrait fit to height 1000 → 750-wide canvas
/// assert_eq!(canvas_width(3000, 4000, 1000), 750);
/// ```
pub fn canvas_width(width: u32, height: u32, target_height: u32) -> u32 {
    let aspect = width as f64 / height as f64;
    (target_height as f64 * aspect) as u32
}

/// Scaled image dimensions that fit inside a `canvas_width × target_height`
/// box (contain-fit, not cover-fit).
///
/// Two candidate uniform scale factors are computed — one that makes the
/// width match the canvas, one that makes the height match the target —
/// and the *larger* one wins, so the scaled image never overflows either
/// canvas axis. Ties go to the width factor.
///
/// # Returns
/// * `(width, height)` of the scaled image, both `<=` the canvas box
pub fn fit_dimensions(
    width: u32,
    height: u32,
    target_height: u32,
    canvas_width: u32,
) -> (u32, u32) {
    let width_factor = width as f64 / canvas_width as f64;
    let height_factor = height as f64 / target_height as f64;

    let factor = if width_factor >= height_factor {
        width_factor
    } else {
        height_factor
    };

    ((width as f64 / factor) as u32, (height as f64 / factor) as u32)
}

/// Top-left position that centers a scaled image on the canvas.
///
/// Integer division: when the leftover space is odd, the extra pixel ends
/// up on the right/bottom edge.
pub fn center_offsets(canvas: (u32, u32), scaled: (u32, u32)) -> (u32, u32) {
    let (canvas_w, canvas_h) = canvas;
    let (scaled_w, scaled_h) = scaled;
    ((canvas_w - scaled_w) / 2, (canvas_h - scaled_h) / 2)
}
