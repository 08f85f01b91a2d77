//! Stylesheet snapshots and exportable-sheet selection
//!
//! The inliner never reads ambient document state. Callers capture the
//! stylesheets attached to the page as a [`StyleSnapshot`] (one [`StyleSheet`]
//! per document sheet, rules in document order) and pass that snapshot in
//! explicitly. [`SheetSelector`] then identifies the single sheet whose rules
//! should travel with exported SVG markup.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Minimum rule count a sheet must exceed to qualify under the heuristic.
///
/// Distinguishes the bundled utility-class stylesheet from small incidental
/// sheets (user-agent quirks, editor widgets) that also have no `href`.
pub const RULE_COUNT_THRESHOLD: usize = 80;

/// Errors that can occur when loading a stylesheet snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snapshot TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors from exportable-sheet selection
///
/// Zero or multiple matches are reported rather than resolved by an
/// arbitrary pick, so a misconfigured snapshot is diagnosable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("no stylesheet matches the selection criteria")]
    NoMatch,
    #[error("{count} stylesheets match the selection criteria; expected exactly one")]
    Ambiguous { count: usize },
    #[error("no stylesheet is registered with label '{label}'")]
    UnknownLabel { label: String },
}

/// One captured document stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleSheet {
    /// Source URL for linked sheets; `None` for page-authored (inline) sheets
    #[serde(default)]
    pub href: Option<String>,
    /// Registration label marking this sheet as the exportable one
    #[serde(default)]
    pub label: Option<String>,
    /// Serialized rule text, in stylesheet order
    #[serde(default)]
    pub rules: Vec<String>,
}

impl StyleSheet {
    /// Create an inline (page-authored) sheet from rule texts
    pub fn inline(rules: Vec<String>) -> Self {
        Self {
            href: None,
            label: None,
            rules,
        }
    }

    /// Create a linked sheet with an external source URL
    pub fn linked(href: impl Into<String>, rules: Vec<String>) -> Self {
        Self {
            href: Some(href.into()),
            label: None,
            rules,
        }
    }

    /// Attach a registration label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether this sheet is page-authored (no external source reference)
    pub fn is_inline(&self) -> bool {
        self.href.is_none()
    }

    /// Whether any rule's text contains the given fingerprint substring
    pub fn contains_fingerprint(&self, fingerprint: &str) -> bool {
        self.rules.iter().any(|rule| rule.contains(fingerprint))
    }
}

/// A captured snapshot of every stylesheet attached to a document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleSnapshot {
    /// Sheets in document order
    #[serde(default)]
    pub sheets: Vec<StyleSheet>,
    /// Source-file patterns the utility-class scanner was configured with
    /// when the snapshot's sheets were generated. Carried for provenance;
    /// not consulted at runtime.
    #[serde(default)]
    pub content_globs: Vec<String>,
}

impl StyleSnapshot {
    /// Build a snapshot from sheets in document order
    pub fn new(sheets: Vec<StyleSheet>) -> Self {
        Self {
            sheets,
            content_globs: Vec::new(),
        }
    }

    /// Load a snapshot from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a snapshot from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(content)?)
    }
}

/// Policy for choosing the exportable sheet out of a snapshot
///
/// A registration [`label`](Self::label) takes precedence: when set, only
/// labels are consulted. Otherwise the heuristic applies: the sheet must be
/// inline, hold strictly more than [`min_rules`](Self::min_rules) rules, and
/// (when an exclusion fingerprint is set) contain no rule mentioning it.
/// Exactly one sheet must qualify.
#[derive(Debug, Clone)]
pub struct SheetSelector {
    /// Registered label to select by, bypassing the heuristic
    pub label: Option<String>,
    /// Rule-count threshold for the heuristic (exclusive)
    pub min_rules: usize,
    /// Substring identifying foreign-tool rules; sheets containing it are
    /// excluded (e.g. an embedded editor's class prefix)
    pub exclude_fingerprint: Option<String>,
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self {
            label: None,
            min_rules: RULE_COUNT_THRESHOLD,
            exclude_fingerprint: None,
        }
    }
}

impl SheetSelector {
    /// Create a selector with the default heuristic
    pub fn new() -> Self {
        Self::default()
    }

    /// Select by registered label instead of the heuristic
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the rule-count threshold (exclusive)
    pub fn with_min_rules(mut self, min_rules: usize) -> Self {
        self.min_rules = min_rules;
        self
    }

    /// Exclude sheets whose rules contain the given substring
    pub fn with_exclude_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.exclude_fingerprint = Some(fingerprint.into());
        self
    }

    /// Pick the single exportable sheet from a snapshot
    pub fn select<'a>(&self, snapshot: &'a StyleSnapshot) -> Result<&'a StyleSheet, SelectError> {
        if let Some(label) = &self.label {
            let mut labeled = snapshot
                .sheets
                .iter()
                .filter(|sheet| sheet.label.as_deref() == Some(label.as_str()));
            let first = labeled.next().ok_or_else(|| SelectError::UnknownLabel {
                label: label.clone(),
            })?;
            let extra = labeled.count();
            if extra > 0 {
                return Err(SelectError::Ambiguous { count: extra + 1 });
            }
            return Ok(first);
        }

        let candidates: Vec<&StyleSheet> = snapshot
            .sheets
            .iter()
            .filter(|sheet| self.matches(sheet))
            .collect();
        match candidates.len() {
            0 => Err(SelectError::NoMatch),
            1 => Ok(candidates[0]),
            count => Err(SelectError::Ambiguous { count }),
        }
    }

    fn matches(&self, sheet: &StyleSheet) -> bool {
        if !sheet.is_inline() || sheet.rules.len() <= self.min_rules {
            return false;
        }
        match &self.exclude_fingerprint {
            Some(fingerprint) => !sheet.contains_fingerprint(fingerprint),
            None => true,
        }
    }
}
