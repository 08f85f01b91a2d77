//! Configuration for the style inliner

use crate::stylesheet::SheetSelector;

use super::font::FontAsset;

/// Number of leading bytes scanned for the styling marker.
///
/// The marker is guaranteed to appear near the start of generated markup when
/// present, so the check is a "detect marker within the first N characters"
/// contract rather than a full-document scan.
pub const STYLE_SCAN_WINDOW: usize = 512;

/// Default placeholder token spliced into generated SVG output
pub const PLACEHOLDER_TOKEN: &str = "/* TW_PLACEHOLDER */";

/// Marker indicating a style block is already present
pub const STYLE_TAG_MARKER: &str = "<style>";

/// Anchor preceding which a new style block is inserted
pub const GROUP_ANCHOR: &str = "<g ";

/// Where serialized rules are spliced into the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceMode {
    /// Replace a placeholder token pre-existing in the markup. Markup whose
    /// leading window lacks the token is treated as already styled.
    Placeholder { token: String },
    /// Insert a `<style>` block immediately before the first `<g ` tag.
    /// Markup whose leading window already contains `<style>` is left alone.
    StyleTag,
}

impl SpliceMode {
    /// Placeholder mode with the default token
    pub fn placeholder() -> Self {
        Self::Placeholder {
            token: PLACEHOLDER_TOKEN.to_string(),
        }
    }
}

/// Configuration options for style inlining
#[derive(Debug, Clone)]
pub struct InlinerConfig {
    /// Leading-byte window scanned for the styling marker
    pub scan_window: usize,

    /// Splice anchor strategy
    pub mode: SpliceMode,

    /// Optional font embedded ahead of the serialized rules
    pub font: Option<FontAsset>,

    /// Policy for picking the exportable sheet from the snapshot
    pub selector: SheetSelector,
}

impl Default for InlinerConfig {
    fn default() -> Self {
        Self {
            scan_window: STYLE_SCAN_WINDOW,
            mode: SpliceMode::placeholder(),
            font: None,
            selector: SheetSelector::default(),
        }
    }
}

impl InlinerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker scan window
    pub fn with_scan_window(mut self, scan_window: usize) -> Self {
        self.scan_window = scan_window;
        self
    }

    /// Use placeholder splicing with a custom token
    pub fn with_placeholder(mut self, token: impl Into<String>) -> Self {
        self.mode = SpliceMode::Placeholder {
            token: token.into(),
        };
        self
    }

    /// Use `<style>` block insertion before the first group tag
    pub fn with_style_tag_mode(mut self) -> Self {
        self.mode = SpliceMode::StyleTag;
        self
    }

    /// Embed a font asset ahead of the rules
    pub fn with_font(mut self, font: FontAsset) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the sheet selection policy
    pub fn with_selector(mut self, selector: SheetSelector) -> Self {
        self.selector = selector;
        self
    }
}
