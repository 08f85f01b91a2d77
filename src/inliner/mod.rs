//! SVG style inliner
//!
//! Takes SVG markup captured from a live page plus a snapshot of the page's
//! stylesheets, and produces standalone markup that renders identically
//! without the page: the exportable sheet's rules (and optionally an embedded
//! font) are spliced into the SVG at a single anchor point.
//!
//! The operation is idempotent. A bounded prefix of the markup is inspected
//! for the styling marker, so already-complete markup passes through
//! unchanged no matter how often it is fed back in.

pub mod config;
pub mod font;

pub use config::{
    InlinerConfig, SpliceMode, GROUP_ANCHOR, PLACEHOLDER_TOKEN, STYLE_SCAN_WINDOW, STYLE_TAG_MARKER,
};
pub use font::{FontAsset, FontError};

use thiserror::Error;

use crate::stylesheet::{SelectError, StyleSheet, StyleSnapshot};

/// Errors that can occur while inlining styles
#[derive(Error, Debug)]
pub enum InlineError {
    /// The snapshot holds zero or several qualifying sheets
    #[error("stylesheet selection failed: {0}")]
    Select(#[from] SelectError),

    /// Style-tag mode found no `<g ` tag to insert before
    #[error("no '<g ' anchor found to splice styles before")]
    AnchorNotFound,
}

/// Splices stylesheet rules into captured SVG markup
#[derive(Debug, Clone, Default)]
pub struct Inliner {
    config: InlinerConfig,
}

impl Inliner {
    /// Create an inliner with the given configuration
    pub fn new(config: InlinerConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &InlinerConfig {
        &self.config
    }

    /// Produce standalone markup from captured SVG markup and a stylesheet
    /// snapshot.
    ///
    /// Already-styled markup is returned with entity normalization only;
    /// otherwise the exportable sheet is selected from the snapshot, its
    /// rules serialized in order with `&` escaped, and the result spliced at
    /// the configured anchor. Exactly one insertion occurs and no original
    /// markup is deleted apart from a consumed placeholder token.
    pub fn inline(
        &self,
        svg_src: &str,
        snapshot: &StyleSnapshot,
    ) -> Result<String, InlineError> {
        let prefix = scan_prefix(svg_src, self.config.scan_window);
        let needs_styling = match &self.config.mode {
            SpliceMode::Placeholder { token } => prefix.contains(token.as_str()),
            SpliceMode::StyleTag => !prefix.contains(STYLE_TAG_MARKER),
        };
        if !needs_styling {
            return Ok(normalize_entities(svg_src));
        }

        let sheet = self.config.selector.select(snapshot)?;
        let styles = self.style_block(sheet);

        let spliced = match &self.config.mode {
            SpliceMode::Placeholder { token } => svg_src.replacen(token.as_str(), &styles, 1),
            SpliceMode::StyleTag => {
                let anchor = svg_src
                    .find(GROUP_ANCHOR)
                    .ok_or(InlineError::AnchorNotFound)?;
                let mut out =
                    String::with_capacity(svg_src.len() + styles.len() + "<style></style>".len());
                out.push_str(&svg_src[..anchor]);
                out.push_str("<style>");
                out.push_str(&styles);
                out.push_str("</style>");
                out.push_str(&svg_src[anchor..]);
                out
            }
        };

        Ok(normalize_entities(&spliced))
    }

    /// The font-face block (when configured) followed by the escaped rules
    fn style_block(&self, sheet: &StyleSheet) -> String {
        let rules = serialize_rules(sheet);
        match &self.config.font {
            Some(font) => format!("{}\n{}", font.to_font_face(), rules),
            None => rules,
        }
    }
}

/// Concatenate a sheet's rule texts in stylesheet order, escaping every
/// literal `&` so the result embeds into XML text content.
///
/// Order is preserved and duplicates are kept: later rules may intentionally
/// override earlier ones.
pub fn serialize_rules(sheet: &StyleSheet) -> String {
    sheet.rules.concat().replace('&', "&amp;")
}

/// Replace the named non-breaking-space entity with its numeric form, which
/// strict XML parsers accept without a DTD.
pub fn normalize_entities(svg: &str) -> String {
    svg.replace("&nbsp;", "&#160;")
}

/// The leading `window` bytes of `svg`, clamped to a char boundary
fn scan_prefix(svg: &str, window: usize) -> &str {
    if svg.len() <= window {
        return svg;
    }
    let mut end = window;
    while !svg.is_char_boundary(end) {
        end -= 1;
    }
    &svg[..end]
}
