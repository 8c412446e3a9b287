//! The compositing pipeline: layout, blit, label, reflow, encode.

use ab_glyph::FontRef;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::compose::compose_canvas;
use crate::encode::encode_jpeg;
use crate::label::draw_labels;
use crate::layout::compute_layout;
use crate::options::CompositionOptions;
use crate::reflow::reflow;
use crate::{CompositeError, Result};

/// Build the labeled comparison image and return encoded JPEG bytes.
///
/// One synchronous, stateless pass: every derived value (layout plan,
/// badge placements, working canvas) lives only for this invocation, and
/// any failure aborts the whole composite with no partial result.
pub fn composite(
    before: &DynamicImage,
    after: &DynamicImage,
    font: &FontRef<'_>,
    options: &CompositionOptions,
) -> Result<Vec<u8>> {
    let canvas = composite_canvas(before, after, font, options)?;
    encode_jpeg(canvas)
}

/// Same as [`composite`] but stops before JPEG encoding, returning the
/// final pixel surface.
pub fn composite_canvas(
    before: &DynamicImage,
    after: &DynamicImage,
    font: &FontRef<'_>,
    options: &CompositionOptions,
) -> Result<RgbaImage> {
    let plan = compute_layout(
        (before.width(), before.height()),
        (after.width(), after.height()),
        options.orientation,
    )?;
    let mut canvas = compose_canvas(before, after, &plan);
    draw_labels(
        &mut canvas,
        &plan,
        font,
        &options.before_label,
        &options.after_label,
    )?;
    Ok(reflow(canvas, options.target_format))
}

/// Decode caller-supplied encoded image bytes, rejecting empty surfaces
/// before any canvas work begins.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(CompositeError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        });
    }
    debug!(
        width = img.width(),
        height = img.height(),
        "Decoded source image"
    );
    Ok(img)
}
