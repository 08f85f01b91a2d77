//! Font assets embedded literally into exported markup
//!
//! Copied SVG renders outside the originating page, where the page's loaded
//! fonts are unavailable. A [`FontAsset`] carries the font bytes themselves,
//! emitted as an `@font-face` declaration with a base64 data URL ahead of the
//! serialized rules.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Errors that can occur when loading a font asset
#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid base64 font payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// A font payload destined for an inline `@font-face` declaration
#[derive(Debug, Clone)]
pub struct FontAsset {
    /// Family name the page's text styles reference
    pub family: String,
    /// Container format, e.g. `woff`
    pub format: String,
    /// Raw font bytes
    pub data: Vec<u8>,
}

impl FontAsset {
    /// Create a font asset from raw bytes
    pub fn new(family: impl Into<String>, format: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            family: family.into(),
            format: format.into(),
            data,
        }
    }

    /// Create a font asset from an already-encoded base64 payload
    pub fn from_base64(
        family: impl Into<String>,
        format: impl Into<String>,
        payload: &str,
    ) -> Result<Self, FontError> {
        let data = STANDARD.decode(payload.as_bytes())?;
        Ok(Self::new(family, format, data))
    }

    /// Load a font asset from a file, taking the format from the extension
    pub fn from_file(family: impl Into<String>, path: &Path) -> Result<Self, FontError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("woff")
            .to_string();
        let data = std::fs::read(path)?;
        Ok(Self::new(family, format, data))
    }

    /// Render the `@font-face` declaration with an inline data URL
    pub fn to_font_face(&self) -> String {
        format!(
            "@font-face {{\n  font-family: '{}';\n  src: url(data:application/x-font-{};charset=utf-8;base64,{}) format('{}');\n}}",
            self.family,
            self.format,
            STANDARD.encode(&self.data),
            self.format
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_face_block() {
        let font = FontAsset::new("liberationmono", "woff", vec![1, 2, 3]);
        let block = font.to_font_face();
        assert!(block.starts_with("@font-face {"));
        assert!(block.contains("font-family: 'liberationmono';"));
        assert!(block.contains("data:application/x-font-woff;charset=utf-8;base64,AQID"));
        assert!(block.contains("format('woff')"));
        assert!(block.ends_with('}'));
    }

    #[test]
    fn test_from_base64_round_trip() {
        let font = FontAsset::from_base64("mono", "woff", "AQID").expect("Should decode");
        assert_eq!(font.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_base64_invalid_payload() {
        let result = FontAsset::from_base64("mono", "woff", "not base64!!");
        assert!(result.is_err());
    }

    #[test]
    fn test_font_face_contains_no_ampersand() {
        // The block is spliced unescaped, so it must stay free of raw '&'.
        let font = FontAsset::new("mono", "woff", (0..=255).collect());
        assert!(!font.to_font_face().contains('&'));
    }
}
