//! Bold sans-serif font discovery for label rendering.
//!
//! The compositor itself takes a parsed [`FontRef`]; callers that do not
//! ship their own font can load one from the standard system locations.

use ab_glyph::FontRef;
use tracing::debug;

use crate::{CompositeError, Result};

/// Read the first usable bold sans-serif font installed on the system.
pub fn load_default_font() -> Result<Vec<u8>> {
    for path in system_font_candidates() {
        if let Ok(data) = std::fs::read(path) {
            debug!(path, "Using system font for label rendering");
            return Ok(data);
        }
    }
    Err(CompositeError::FontUnavailable)
}

/// Parse raw TTF/OTF bytes into a font handle.
pub fn parse_font(data: &[u8]) -> Result<FontRef<'_>> {
    FontRef::try_from_slice(data).map_err(|_| CompositeError::InvalidFont)
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Verdana Bold.ttf",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\arialbd.ttf",
            "C:\\Windows\\Fonts\\segoeuib.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/truetype/liberation2/LiberationSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let err = parse_font(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, CompositeError::InvalidFont));
    }

    #[test]
    fn default_font_parses_when_present() {
        // Systems without any candidate font skip the parse check.
        let Ok(data) = load_default_font() else {
            return;
        };
        assert!(parse_font(&data).is_ok());
    }
}
