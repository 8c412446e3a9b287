//! Letterboxing the finished composite into fixed social-media sizes.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::compose::{blank_canvas, overlay};
use crate::options::TargetFormat;

/// Fit the composite into `format`'s fixed dimensions, centered on a pure
/// white field with a uniform, aspect-preserving scale.
///
/// `Original` passes the canvas through untouched. Labels were baked in
/// at the composite's own resolution and are never re-laid-out here, so
/// their on-screen size changes with the scale factor.
pub fn reflow(canvas: RgbaImage, format: TargetFormat) -> RgbaImage {
    let Some((target_width, target_height)) = format.dimensions() else {
        return canvas;
    };

    let (src_width, src_height) = canvas.dimensions();
    let scale = (f64::from(target_width) / f64::from(src_width))
        .min(f64::from(target_height) / f64::from(src_height));
    let scaled_width = ((f64::from(src_width) * scale).round() as u32).clamp(1, target_width);
    let scaled_height = ((f64::from(src_height) * scale).round() as u32).clamp(1, target_height);

    debug!(
        src_width,
        src_height,
        target_width,
        target_height,
        scale,
        "Letterboxing composite into preset format"
    );

    let scaled = DynamicImage::ImageRgba8(canvas)
        .resize_exact(scaled_width, scaled_height, FilterType::Lanczos3)
        .to_rgba8();

    let mut target = blank_canvas(target_width, target_height);
    overlay(
        &mut target,
        &scaled,
        (target_width - scaled_width) / 2,
        (target_height - scaled_height) / 2,
    );
    target
}
