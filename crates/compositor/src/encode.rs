//! JPEG serialization of the finished composite.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::{CompositeError, JPEG_QUALITY, Result};

/// Encode the composite as JPEG at the fixed quality factor.
pub fn encode_jpeg(canvas: RgbaImage) -> Result<Vec<u8>> {
    // JPEG carries no alpha; the canvas was composited over white.
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    let mut cursor = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(CompositeError::Encode)?;
    let bytes = cursor.into_inner();
    debug!(len = bytes.len(), "Encoded composite as JPEG");
    Ok(bytes)
}

/// Wrap encoded JPEG bytes in a `data:` URI for direct embedding.
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
}

/// Suggested download filename, e.g. `before-after-1700000000000.jpg`.
pub fn suggested_filename() -> String {
    format!("before-after-{}.jpg", chrono::Utc::now().timestamp_millis())
}
