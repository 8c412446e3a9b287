//! Caller-supplied options: label texts, orientation, and output format.

use serde::{Deserialize, Serialize};

/// How the two images are arranged on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left-to-right, heights matched.
    #[default]
    Horizontal,
    /// Top-to-bottom, widths matched.
    Vertical,
}

/// Output size preset.
///
/// `Original` keeps the composite at its as-laid-out size; the fixed
/// presets letterbox it onto a white field of the preset's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetFormat {
    #[default]
    Original,
    /// 1:1 (1080x1080)
    InstagramSquare,
    /// 9:16 (1080x1920)
    InstagramStory,
    /// 1.91:1 (1200x630)
    FacebookPost,
    /// 16:9 (1200x675)
    TwitterPost,
}

impl TargetFormat {
    /// Fixed pixel dimensions for this preset, or `None` for `Original`.
    pub fn dimensions(self) -> Option<(u32, u32)> {
        match self {
            TargetFormat::Original => None,
            TargetFormat::InstagramSquare => Some((1080, 1080)),
            TargetFormat::InstagramStory => Some((1080, 1920)),
            TargetFormat::FacebookPost => Some((1200, 630)),
            TargetFormat::TwitterPost => Some((1200, 675)),
        }
    }
}

/// Options for one compositing invocation. Owned value type, passed by
/// reference into the pipeline and never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionOptions {
    pub before_label: String,
    pub after_label: String,
    pub orientation: Orientation,
    pub target_format: TargetFormat,
}

impl Default for CompositionOptions {
    fn default() -> Self {
        Self {
            before_label: "BEFORE".to_string(),
            after_label: "AFTER".to_string(),
            orientation: Orientation::Horizontal,
            target_format: TargetFormat::Original,
        }
    }
}

impl CompositionOptions {
    /// Build options from a label preset, keeping default layout settings.
    pub fn from_preset(preset: &LabelPreset) -> Self {
        Self {
            before_label: preset.before_label.to_string(),
            after_label: preset.after_label.to_string(),
            ..Self::default()
        }
    }
}

/// A named label pair offered by settings UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelPreset {
    pub id: &'static str,
    pub before_label: &'static str,
    pub after_label: &'static str,
    pub display_name: &'static str,
}

/// The closed set of label pairs the application offers.
pub const LABEL_PRESETS: [LabelPreset; 5] = [
    LabelPreset {
        id: "before-after",
        before_label: "BEFORE",
        after_label: "AFTER",
        display_name: "Before / After",
    },
    LabelPreset {
        id: "dirty-clean",
        before_label: "DIRTY",
        after_label: "CLEAN",
        display_name: "Dirty / Clean",
    },
    LabelPreset {
        id: "broken-fixed",
        before_label: "BROKEN",
        after_label: "FIXED",
        display_name: "Broken / Fixed",
    },
    LabelPreset {
        id: "clogged-clear",
        before_label: "CLOGGED",
        after_label: "CLEAR",
        display_name: "Clogged / Clear",
    },
    LabelPreset {
        id: "old-new",
        before_label: "OLD",
        after_label: "NEW",
        display_name: "Old / New",
    },
];
