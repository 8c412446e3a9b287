//! Working-canvas allocation and source-image blitting.

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::layout::LayoutPlan;

pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Allocate a pure-white RGBA canvas.
pub fn blank_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, WHITE)
}

/// Alpha-composite `top` onto `base` at the given position.
///
/// Pixels falling outside `base` are skipped. Translucent sources blend
/// against whatever the canvas already holds, so compositing over the
/// white field keeps JPEG output sensible.
pub fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            let alpha = pixel[3] as f32 / 255.0;
            if alpha > 0.99 {
                base.put_pixel(target_x, target_y, *pixel);
            } else if alpha > 0.01 {
                let bg = base.get_pixel(target_x, target_y);
                let blended = blend_pixel(bg, pixel, alpha);
                base.put_pixel(target_x, target_y, blended);
            }
        }
    }
}

/// Resize both sources to their placements and blit them onto a fresh
/// white canvas. Nothing draws over the separator band, so it stays white.
pub fn compose_canvas(
    before: &DynamicImage,
    after: &DynamicImage,
    plan: &LayoutPlan,
) -> RgbaImage {
    let mut canvas = blank_canvas(plan.canvas_width, plan.canvas_height);

    for (img, placement) in [(before, plan.before), (after, plan.after)] {
        if placement.width == 0 || placement.height == 0 {
            continue;
        }
        let resized = img
            .resize_exact(placement.width, placement.height, FilterType::Lanczos3)
            .to_rgba8();
        overlay(&mut canvas, &resized, placement.x, placement.y);
    }

    debug!(
        width = canvas.width(),
        height = canvas.height(),
        "Blitted source images onto working canvas"
    );
    canvas
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}
