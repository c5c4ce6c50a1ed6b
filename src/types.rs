// src/types.rs
//! Core data types: input violations and output CodeClimate issues.

use serde::{Deserialize, Serialize};

/// A single violation reported by a linting pass.
///
/// This mirrors the record shape flake8 hands to its formatters: an opaque
/// rule code, a file location, and a human-readable message. The filename is
/// echoed into the output exactly as supplied, prefix and all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub code: String,
    pub filename: String,
    pub line_number: u32,
    pub column_number: Option<u32>,
    pub text: String,
}

impl Violation {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        filename: impl Into<String>,
        line_number: u32,
        column_number: Option<u32>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            filename: filename.into(),
            line_number,
            column_number,
            text: text.into(),
        }
    }
}

/// Issue severity, ordered by impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    /// Returns the label used in the JSON output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
            Self::Blocker => "blocker",
        }
    }
}

/// CodeClimate issue category. Closed vocabulary; the dashboard rejects
/// anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Bug Risk")]
    BugRisk,
    Clarity,
    Compatibility,
    Complexity,
    Duplication,
    Performance,
    Security,
    Style,
}

impl Category {
    /// Returns the label used in the JSON output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BugRisk => "Bug Risk",
            Self::Clarity => "Clarity",
            Self::Compatibility => "Compatibility",
            Self::Complexity => "Complexity",
            Self::Duplication => "Duplication",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::Style => "Style",
        }
    }
}

/// Line span for an issue location. CodeClimate supports multi-line spans;
/// lint violations are single-line, so begin == end.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Lines {
    pub begin: u32,
    pub end: u32,
}

/// Where an issue lives. `path` echoes the violation filename unmodified.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub path: String,
    pub lines: Lines,
}

/// One CodeClimate issue object, built from exactly one [`Violation`].
///
/// Serialized field order matches the GitLab code-quality artifact docs.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub check_name: String,
    pub description: String,
    pub categories: Vec<Category>,
    pub location: Location,
    pub fingerprint: String,
    pub severity: Severity,
}
