//! Adaptive-contrast label badges.
//!
//! Each label is drawn as a filled pill anchored to the bottom of its
//! image region. The badge rectangle is sampled from the canvas as it
//! currently stands, the sampled pixels are averaged, and the palette
//! color farthest from that average (Euclidean RGB distance) becomes the
//! fill. Draw order is before-label then after-label: sampling always
//! reads the surface produced by the previous pass.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use tracing::debug;

use crate::layout::{LayoutPlan, Placement};
use crate::{CompositeError, Result};

/// Badge fill candidates, tried in order; ties go to the earlier entry.
const PALETTE: [[u8; 3]; 5] = [
    [255, 230, 0],   // yellow
    [220, 20, 20],   // red
    [0, 100, 255],   // blue
    [20, 20, 20],    // black
    [255, 255, 255], // white
];

const YELLOW: [u8; 3] = PALETTE[0];
const WHITE: [u8; 3] = PALETTE[4];

/// Horizontal alignment of a badge within its image region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

/// Computed geometry and colors for one badge; used once, then discarded.
#[derive(Debug, Clone, Copy)]
struct BadgeRect {
    x: i64,
    y: i64,
    width: u32,
    height: u32,
}

/// Measure the pixel width of a string at the given font and scale,
/// including kerning.
pub fn measure_text_width(font: &FontRef<'_>, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Draw both label badges onto the composited canvas.
///
/// The before label sits left-aligned in its region, the after label
/// right-aligned in its own. Badges never cross the separator: margins
/// are proportional to each image's own placed size.
pub fn draw_labels(
    canvas: &mut RgbaImage,
    plan: &LayoutPlan,
    font: &FontRef<'_>,
    before_label: &str,
    after_label: &str,
) -> Result<()> {
    let font_size = ((plan.cross_dimension() as f32 * 0.05).floor() as u32).max(1);
    let scale = PxScale::from(font_size as f32);

    // Draw order matters: each badge samples the canvas as it currently is.
    for (text, region, align) in [
        (before_label, plan.before, Align::Left),
        (after_label, plan.after, Align::Right),
    ] {
        draw_badge(canvas, font, scale, font_size, text, region, align)?;
    }
    Ok(())
}

fn draw_badge(
    canvas: &mut RgbaImage,
    font: &FontRef<'_>,
    scale: PxScale,
    font_size: u32,
    text: &str,
    region: Placement,
    align: Align,
) -> Result<()> {
    // Empty strings still get a minimal badge.
    let text_width = measure_text_width(font, scale, text).max(1);
    let rect = badge_rect(region, align, text_width, font_size);

    let background = mean_color(canvas, rect)?;
    let (fill, text_color) = best_contrast(background);
    debug!(text, ?background, ?fill, "Drawing label badge");

    draw_pill(canvas, rect, Rgba([fill[0], fill[1], fill[2], 255]));

    let center_x = rect.x + i64::from(rect.width) / 2;
    let center_y = rect.y + i64::from(rect.height) / 2;
    let text_x = center_x - i64::from(text_width) / 2;
    // Middle-baseline centering varies across text engines; nudge down by
    // 5% of the font size to compensate.
    let text_y =
        center_y - i64::from(font_size) / 2 + (font_size as f32 * 0.05).round() as i64;
    draw_text_mut(
        canvas,
        Rgba([text_color[0], text_color[1], text_color[2], 255]),
        text_x as i32,
        text_y as i32,
        scale,
        font,
        text,
    );
    Ok(())
}

/// Badge geometry for one label.
///
/// Interior padding is 40% of the text width per horizontal side and 40%
/// of the font size per vertical side. The badge is inset from its image
/// edge by 5% of the image's placed width, and anchored to the region's
/// bottom with a 5%-of-placed-height inset.
fn badge_rect(region: Placement, align: Align, text_width: u32, font_size: u32) -> BadgeRect {
    let width = (text_width as f32 * 1.8).round() as u32;
    let height = (font_size as f32 * 1.8).round() as u32;

    let margin_x = (region.width as f32 * 0.05).floor() as i64;
    let margin_y = (region.height as f32 * 0.05).floor() as i64;

    let x = match align {
        Align::Left => i64::from(region.x) + margin_x,
        Align::Right => {
            i64::from(region.x) + i64::from(region.width) - margin_x - i64::from(width)
        }
    };
    let y = i64::from(region.y) + i64::from(region.height) - margin_y - i64::from(height);

    BadgeRect {
        x,
        y,
        width,
        height,
    }
}

/// Arithmetic mean of the R, G, B channels over `rect`, floored.
///
/// A rectangle outside the canvas means the layout math is inconsistent;
/// that is a fatal [`CompositeError::LayoutOverflow`], never clamped.
fn mean_color(canvas: &RgbaImage, rect: BadgeRect) -> Result<[u8; 3]> {
    let (canvas_width, canvas_height) = canvas.dimensions();
    let in_bounds = rect.x >= 0
        && rect.y >= 0
        && rect.width > 0
        && rect.height > 0
        && rect.x + i64::from(rect.width) <= i64::from(canvas_width)
        && rect.y + i64::from(rect.height) <= i64::from(canvas_height);
    if !in_bounds {
        return Err(CompositeError::LayoutOverflow {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            canvas_width,
            canvas_height,
        });
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for dy in 0..rect.height {
        for dx in 0..rect.width {
            let px = canvas.get_pixel(rect.x as u32 + dx, rect.y as u32 + dy);
            r += u64::from(px[0]);
            g += u64::from(px[1]);
            b += u64::from(px[2]);
        }
    }
    let count = u64::from(rect.width) * u64::from(rect.height);
    Ok([(r / count) as u8, (g / count) as u8, (b / count) as u8])
}

/// Pick the palette color farthest from `background`, plus a legible text
/// color: black on yellow or white fills, white otherwise.
fn best_contrast(background: [u8; 3]) -> ([u8; 3], [u8; 3]) {
    let mut best = PALETTE[0];
    let mut best_dist = -1.0f64;
    for color in PALETTE {
        let dist = rgb_distance(background, color);
        if dist > best_dist {
            best_dist = dist;
            best = color;
        }
    }

    let text = if best == YELLOW || best == WHITE {
        [0, 0, 0]
    } else {
        [255, 255, 255]
    };
    (best, text)
}

fn rgb_distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    let dr = f64::from(a[0]) - f64::from(b[0]);
    let dg = f64::from(a[1]) - f64::from(b[1]);
    let db = f64::from(a[2]) - f64::from(b[2]);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Fill a pill shape: corner radius of half the badge height, clamped to
/// half the width for badges narrower than they are tall (short or empty
/// labels). Every painted pixel stays inside the badge rectangle, so the
/// separator band is never overdrawn.
fn draw_pill(canvas: &mut RgbaImage, rect: BadgeRect, color: Rgba<u8>) {
    let radius = (i64::from(rect.width.min(rect.height)) - 1) / 2;

    // Two overlapping slabs cover everything but the corners.
    draw_filled_rect_mut(
        canvas,
        Rect::at((rect.x + radius) as i32, rect.y as i32)
            .of_size(rect.width - 2 * radius as u32, rect.height),
        color,
    );
    draw_filled_rect_mut(
        canvas,
        Rect::at(rect.x as i32, (rect.y + radius) as i32)
            .of_size(rect.width, rect.height - 2 * radius as u32),
        color,
    );
    for cx in [rect.x + radius, rect.x + i64::from(rect.width) - 1 - radius] {
        for cy in [rect.y + radius, rect.y + i64::from(rect.height) - 1 - radius] {
            draw_filled_circle_mut(canvas, (cx as i32, cy as i32), radius as i32, color);
        }
    }
}
