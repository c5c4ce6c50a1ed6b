// src/registry.rs
//! Injectable checker-family registry.
//!
//! flake8 rule codes carry no uniform tool marker: pycodestyle owns E/W,
//! mccabe owns exactly C901, pyflakes scatters across F-codes, and every
//! optional plugin claims its own prefix. Classification therefore runs off
//! an ordered rule table, first match wins. The table is plain data so new
//! checker families come from configuration, not code changes.

use std::collections::BTreeSet;

use crate::types::Category;

/// The mccabe complexity checker registers a single code.
const MCCABE_CODES: &[&str] = &["C901"];

/// Pyflakes codes, enumerated explicitly. Pyflakes shares the F prefix with
/// other plugins (e.g. flake8-bugbear's future offshoots), so membership is
/// a fixed set rather than a prefix rule.
const PYFLAKES_CODES: &[&str] = &[
    "F401", "F402", "F403", "F404", "F405", "F501", "F502", "F503", "F504", "F505", "F506",
    "F507", "F508", "F509", "F521", "F522", "F523", "F524", "F525", "F601", "F602", "F631",
    "F632", "F633", "F701", "F702", "F703", "F704", "F705", "F706", "F707", "F811", "F821",
    "F822", "F823", "F841", "F901",
];

/// How a rule claims ownership of a code.
#[derive(Debug, Clone)]
pub enum CodeMatcher {
    /// Exact membership in an enumerated code set.
    Exact(BTreeSet<String>),
    /// Case-sensitive prefix match.
    Prefix(String),
}

impl CodeMatcher {
    fn matches(&self, code: &str) -> bool {
        match self {
            Self::Exact(codes) => codes.contains(code),
            Self::Prefix(prefix) => code.starts_with(prefix.as_str()),
        }
    }
}

/// One checker family: the tool token emitted as `check_name`, the codes it
/// owns, and the categories its issues map to. An empty category list means
/// the classifier falls back to the Bug Risk default.
#[derive(Debug, Clone)]
pub struct CheckRule {
    pub tool: String,
    pub matcher: CodeMatcher,
    pub categories: Vec<Category>,
}

impl CheckRule {
    #[must_use]
    pub fn exact(tool: &str, codes: &[&str], categories: Vec<Category>) -> Self {
        Self {
            tool: tool.to_string(),
            matcher: CodeMatcher::Exact(codes.iter().map(ToString::to_string).collect()),
            categories,
        }
    }

    #[must_use]
    pub fn prefix(tool: &str, prefix: &str, categories: Vec<Category>) -> Self {
        Self {
            tool: tool.to_string(),
            matcher: CodeMatcher::Prefix(prefix.to_string()),
            categories,
        }
    }
}

/// Ordered rule table. Lookup order is decision order: the built-in exact
/// sets are consulted before prefix heuristics, and extensions after the
/// core tools, so registration order is semantic.
#[derive(Debug, Clone, Default)]
pub struct CheckRegistry {
    rules: Vec<CheckRule>,
}

impl CheckRegistry {
    /// Registry covering only the checkers flake8 itself bundles.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register(CheckRule::exact("mccabe", MCCABE_CODES, vec![Category::Complexity]));
        registry.register(CheckRule::exact("pyflakes", PYFLAKES_CODES, vec![]));
        registry.register(CheckRule::prefix("pycodestyle", "E", vec![Category::Style]));
        registry.register(CheckRule::prefix("pycodestyle", "W", vec![Category::Style]));
        registry.register(CheckRule::prefix("logging-format", "G", vec![]));
        registry
    }

    /// Built-in checkers plus the commonly installed plugin families.
    #[must_use]
    pub fn with_default_extensions() -> Self {
        let mut registry = Self::builtin();
        registry.register(CheckRule::prefix("bandit", "S", vec![Category::Security]));
        registry.register(CheckRule::prefix("import-order", "I", vec![Category::Style]));
        registry.register(CheckRule::prefix(
            "simplify",
            "SIM",
            vec![Category::Style, Category::Clarity],
        ));
        registry
    }

    /// Appends a rule. Later rules only see codes nothing earlier claimed.
    pub fn register(&mut self, rule: CheckRule) {
        self.rules.push(rule);
    }

    /// Finds the first rule owning `code`, if any. Never errors: an
    /// unrecognized code is simply a miss.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&CheckRule> {
        self.rules.iter().find(|rule| rule.matcher.matches(code))
    }
}
