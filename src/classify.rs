// src/classify.rs
//! Violation classification: tool name, categories, severity.
//!
//! All three operations are total over any well-formed violation. A code the
//! registry does not recognize is not an error; it resolves to the
//! "unknown" / Bug Risk / minor defaults.

use crate::registry::CheckRegistry;
use crate::types::{Category, Severity, Violation};

/// Tool token emitted when no checker family claims the code.
pub const UNKNOWN_TOOL: &str = "unknown";

/// Pure classifier over an injected checker registry.
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: CheckRegistry,
}

impl Classifier {
    #[must_use]
    pub fn new(registry: CheckRegistry) -> Self {
        Self { registry }
    }

    /// Maps a violation to the short name of the tool that produced it.
    #[must_use]
    pub fn check_name(&self, v: &Violation) -> &str {
        self.registry
            .lookup(&v.code)
            .map_or(UNKNOWN_TOOL, |rule| rule.tool.as_str())
    }

    /// Maps a violation to its issue categories. Never empty: a violation
    /// with no matched rule (or a rule with no categories) is a Bug Risk.
    #[must_use]
    pub fn categories(&self, v: &Violation) -> Vec<Category> {
        let mut result = self
            .registry
            .lookup(&v.code)
            .map(|rule| rule.categories.clone())
            .unwrap_or_default();

        if result.is_empty() {
            result.push(Category::BugRisk);
        }
        result
    }

    /// Maps a violation to a severity.
    ///
    /// E-codes (pycodestyle errors) are major. S-codes are critical, but
    /// only when a recognized security checker actually owns the code;
    /// an S-code with no registered security family stays minor.
    #[must_use]
    pub fn severity(&self, v: &Violation) -> Severity {
        if v.code.starts_with('E') {
            return Severity::Major;
        }
        if v.code.starts_with('S') && self.matches_security_tool(&v.code) {
            return Severity::Critical;
        }
        Severity::Minor
    }

    fn matches_security_tool(&self, code: &str) -> bool {
        self.registry
            .lookup(code)
            .is_some_and(|rule| rule.categories.contains(&Category::Security))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(CheckRegistry::with_default_extensions())
    }
}
