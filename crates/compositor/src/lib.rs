//! Before/after comparison image compositor.
//!
//! Takes two decoded raster images plus a small options value and produces
//! one labeled JPEG comparison image: side-by-side (or stacked) layout with
//! a white separator, adaptive-contrast label badges, and optional
//! letterboxing into fixed social-media sizes.
//!
//! The whole pipeline is a single synchronous pass — see
//! [`pipeline::composite`]. Nothing is retained between invocations.

pub mod compose;
pub mod encode;
pub mod font;
pub mod label;
pub mod layout;
pub mod options;
pub mod pipeline;
pub mod reflow;

// Re-exports for convenience
pub use encode::{encode_jpeg, suggested_filename, to_data_uri};
pub use layout::{LayoutPlan, Placement, compute_layout};
pub use options::{CompositionOptions, LABEL_PRESETS, LabelPreset, Orientation, TargetFormat};
pub use pipeline::{composite, composite_canvas, decode_image};

/// Width of the white band separating the two images, in pixels.
pub const SEPARATOR: u32 = 15;

/// Quality factor for the encoded JPEG output.
pub const JPEG_QUALITY: u8 = 95;

/// Errors that can occur while building a comparison image.
///
/// Every failure aborts the whole invocation; there is no partial result
/// and no retry at this layer.
#[derive(Debug, thiserror::Error)]
pub enum CompositeError {
    #[error("failed to decode source image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("composited images span {span} pixels, exceeding the supported canvas size")]
    CanvasTooLarge { span: u64 },

    #[error(
        "rectangle at ({x}, {y}) sized {width}x{height} falls outside the {canvas_width}x{canvas_height} canvas"
    )]
    LayoutOverflow {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error("failed to encode composite as JPEG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to parse font data (TTF/OTF)")]
    InvalidFont,

    #[error("no usable bold font found in the standard system locations")]
    FontUnavailable,
}

/// Result type alias for compositor operations.
pub type Result<T> = std::result::Result<T, CompositeError>;
