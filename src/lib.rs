//! Graphclip - style-complete SVG export for Graphviz graphs
//!
//! This library lays out DOT source through an external Graphviz engine and
//! splices captured page styles into the resulting SVG, so the markup renders
//! identically outside the originating page.
//!
//! # Example
//!
//! ```rust
//! use graphclip::inliner::InlinerConfig;
//! use graphclip::stylesheet::SheetSelector;
//! use graphclip::{export_svg, ExportConfig, StyleSheet, StyleSnapshot};
//!
//! let snapshot = StyleSnapshot::new(vec![StyleSheet::inline(vec![
//!     ".node{fill:red}".to_string(),
//! ])]);
//! let config = ExportConfig::new().with_inliner(
//!     InlinerConfig::new()
//!         .with_style_tag_mode()
//!         .with_selector(SheetSelector::new().with_min_rules(0)),
//! );
//!
//! let svg = export_svg(r#"<svg><g id="a"></g></svg>"#, &snapshot, &config).unwrap();
//! assert!(svg.contains("<style>.node{fill:red}</style>"));
//! ```

pub mod clipboard;
pub mod inliner;
pub mod layout;
pub mod stylesheet;

pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard};
pub use inliner::{FontAsset, InlineError, Inliner, InlinerConfig, SpliceMode};
pub use layout::{GraphvizEngine, LayoutError, LayoutImage, LayoutOpts};
pub use stylesheet::{SelectError, SheetSelector, StyleSheet, StyleSnapshot};

use thiserror::Error;

/// Errors that can occur during the export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    /// Error while laying out the DOT source
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error while inlining styles
    #[error("inline error: {0}")]
    Inline(#[from] InlineError),
}

/// Configuration for the complete export pipeline
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Style inliner configuration
    pub inliner: InlinerConfig,
}

impl ExportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inliner configuration
    pub fn with_inliner(mut self, inliner: InlinerConfig) -> Self {
        self.inliner = inliner;
        self
    }
}

/// Inline captured page styles into already-rendered SVG markup.
///
/// The snapshot stands in for the document's stylesheet collection; the
/// caller captures it at the same moment as the markup. The operation is
/// idempotent: feeding its output back in returns the same string.
pub fn export_svg(
    svg_src: &str,
    snapshot: &StyleSnapshot,
    config: &ExportConfig,
) -> Result<String, ExportError> {
    let inliner = Inliner::new(config.inliner.clone());
    Ok(inliner.inline(svg_src, snapshot)?)
}

/// Lay out DOT source and inline styles in one pass.
///
/// The engine must already be loaded; layout failures propagate unchanged.
pub async fn render_and_export(
    engine: &GraphvizEngine,
    dot_src: &str,
    opts: &LayoutOpts,
    snapshot: &StyleSnapshot,
    config: &ExportConfig,
) -> Result<String, ExportError> {
    let svg = engine.layout(dot_src, opts).await?;
    export_svg(&svg, snapshot, config)
}
