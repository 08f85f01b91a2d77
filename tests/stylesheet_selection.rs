//! Integration tests for exportable-sheet selection

use graphclip::stylesheet::{SelectError, SheetSelector, StyleSheet, StyleSnapshot};
use pretty_assertions::assert_eq;

fn filler_rules(count: usize) -> Vec<String> {
    (0..count).map(|i| format!(".u{}{{opacity:1}}", i)).collect()
}

#[test]
fn test_selects_large_inline_sheet_among_mixed_sheets() {
    // A: linked, 10 rules. B: inline, 120 rules. C: inline, 5 rules.
    let snapshot = StyleSnapshot::new(vec![
        StyleSheet::linked("https://cdn.example.com/a.css", filler_rules(10)),
        StyleSheet::inline(filler_rules(120)),
        StyleSheet::inline(filler_rules(5)),
    ]);

    let selected = SheetSelector::new().select(&snapshot).expect("Should select");
    assert_eq!(selected.rules.len(), 120);
}

#[test]
fn test_two_qualifying_sheets_fail_deterministically() {
    let snapshot = StyleSnapshot::new(vec![
        StyleSheet::inline(filler_rules(100)),
        StyleSheet::inline(filler_rules(150)),
    ]);

    // Never an arbitrary pick and never a panic: always the same explicit error.
    for _ in 0..3 {
        assert_eq!(
            SheetSelector::new().select(&snapshot),
            Err(SelectError::Ambiguous { count: 2 })
        );
    }
}

#[test]
fn test_registered_label_overrides_heuristic() {
    let snapshot = StyleSnapshot::new(vec![
        StyleSheet::inline(filler_rules(500)),
        StyleSheet::inline(vec![".tiny{}".to_string()]).with_label("export"),
    ]);

    let selected = SheetSelector::new()
        .with_label("export")
        .select(&snapshot)
        .expect("Should select");
    assert_eq!(selected.rules, vec![".tiny{}".to_string()]);
}

#[test]
fn test_snapshot_round_trip_from_toml() {
    let snapshot = StyleSnapshot::from_toml_str(
        r#"
content_globs = ["**/src/**/*.rs"]

[[sheets]]
href = "https://cdn.example.com/reset.css"
rules = ["*{margin:0}"]

[[sheets]]
rules = [".a{color:red}", ".b{color:blue}"]
"#,
    )
    .expect("Should parse");

    let selector = SheetSelector::new().with_min_rules(1);
    let selected = selector.select(&snapshot).expect("Should select");
    assert_eq!(
        selected.rules,
        vec![".a{color:red}".to_string(), ".b{color:blue}".to_string()]
    );
}
