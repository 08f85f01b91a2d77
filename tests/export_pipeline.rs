//! Integration tests for the export pipeline and its boundaries

use graphclip::clipboard::{write_or_log, ClipboardError, ClipboardSink};
use graphclip::inliner::InlinerConfig;
use graphclip::layout::{GraphvizEngine, LayoutError};
use graphclip::stylesheet::SheetSelector;
use graphclip::{export_svg, ExportConfig, ExportError, StyleSheet, StyleSnapshot};
use pretty_assertions::assert_eq;

struct RecordingSink {
    written: Vec<String>,
}

impl ClipboardSink for RecordingSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.written.push(text.to_string());
        Ok(())
    }
}

struct FailingSink;

impl ClipboardSink for FailingSink {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("no clipboard in test".to_string()))
    }
}

fn style_tag_config() -> ExportConfig {
    ExportConfig::new().with_inliner(
        InlinerConfig::new()
            .with_style_tag_mode()
            .with_selector(SheetSelector::new().with_min_rules(0)),
    )
}

#[test]
fn test_export_then_copy_to_sink() {
    let snapshot = StyleSnapshot::new(vec![StyleSheet::inline(vec![
        ".node{fill:#fff}".to_string(),
    ])]);
    let svg = export_svg(
        r#"<svg><g class="node">n</g></svg>"#,
        &snapshot,
        &style_tag_config(),
    )
    .expect("Should export");

    let mut sink = RecordingSink { written: vec![] };
    write_or_log(&mut sink, &svg);
    assert_eq!(
        sink.written,
        vec![r#"<svg><style>.node{fill:#fff}</style><g class="node">n</g></svg>"#.to_string()]
    );
}

#[test]
fn test_clipboard_failure_is_terminal_and_silent() {
    let mut sink = FailingSink;
    // Logged only; no retry, no panic, nothing surfaced to the caller.
    write_or_log(&mut sink, "<svg/>");
}

#[test]
fn test_ambiguous_selection_surfaces_through_pipeline() {
    let snapshot = StyleSnapshot::new(vec![
        StyleSheet::inline(vec![".a{}".to_string()]),
        StyleSheet::inline(vec![".b{}".to_string()]),
    ]);
    let result = export_svg("<svg><g >x</g></svg>", &snapshot, &style_tag_config());
    assert!(matches!(result, Err(ExportError::Inline(_))));
}

#[test]
fn test_export_is_idempotent_through_public_entry_point() {
    let snapshot = StyleSnapshot::new(vec![StyleSheet::inline(vec![".a{}".to_string()])]);
    let config = style_tag_config();

    let once = export_svg("<svg><g >x</g></svg>", &snapshot, &config).expect("Should export");
    let twice = export_svg(&once, &snapshot, &config).expect("Should export");
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_missing_layout_engine_is_reported() {
    let result = GraphvizEngine::load_with_engine("graphclip-missing-binary").await;
    match result {
        Err(LayoutError::EngineNotFound { engine, .. }) => {
            assert_eq!(engine, "graphclip-missing-binary");
        }
        other => panic!("expected EngineNotFound, got {:?}", other.map(|_| ())),
    }
}
