// src/config.rs
//! Optional TOML configuration.
//!
//! `lintclimate.toml` (or `--config FILE`) can pick the description style
//! and register checker families beyond the bundled defaults:
//!
//! ```toml
//! description = "plain"
//!
//! [[extensions]]
//! tool = "docstrings"
//! prefix = "D"
//! categories = ["Clarity"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::emitter::DescriptionStyle;
use crate::error::{ReportError, Result};
use crate::registry::{CheckRegistry, CheckRule, CodeMatcher};
use crate::types::Category;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "lintclimate.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub description: DescriptionStyle,
    #[serde(default)]
    pub extensions: Vec<ExtensionConfig>,
}

/// One configured checker family. Exactly one of `prefix` / `codes` must be
/// given.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionConfig {
    pub tool: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub codes: Option<Vec<String>>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit path must exist and parse. Without one, `lintclimate.toml`
    /// is used if present, otherwise defaults apply.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| ReportError::Config(format!("{}: {e}", path.display())))
    }

    /// Builds the checker registry: bundled defaults plus configured
    /// extensions, in file order.
    ///
    /// # Errors
    /// Returns error if an extension specifies neither `prefix` nor `codes`.
    pub fn registry(&self) -> Result<CheckRegistry> {
        let mut registry = CheckRegistry::with_default_extensions();
        for ext in &self.extensions {
            registry.register(ext.to_rule()?);
        }
        Ok(registry)
    }
}

impl ExtensionConfig {
    fn to_rule(&self) -> Result<CheckRule> {
        let matcher = match (&self.prefix, &self.codes) {
            (Some(prefix), None) => CodeMatcher::Prefix(prefix.clone()),
            (None, Some(codes)) => CodeMatcher::Exact(codes.iter().cloned().collect()),
            _ => {
                return Err(ReportError::Config(format!(
                    "extension '{}' needs exactly one of 'prefix' or 'codes'",
                    self.tool
                )))
            }
        };
        Ok(CheckRule {
            tool: self.tool.clone(),
            matcher,
            categories: self.categories.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.description, DescriptionStyle::Suffixed);
        assert!(config.extensions.is_empty());
    }

    #[test]
    fn description_style_parses() {
        let config: Config = toml::from_str("description = \"plain\"").unwrap();
        assert_eq!(config.description, DescriptionStyle::Plain);
    }

    #[test]
    fn prefix_extension_registers() {
        let config: Config = toml::from_str(
            r#"
            [[extensions]]
            tool = "docstrings"
            prefix = "D"
            categories = ["Clarity"]
            "#,
        )
        .unwrap();
        let registry = config.registry().unwrap();
        let rule = registry.lookup("D101").unwrap();
        assert_eq!(rule.tool, "docstrings");
        assert_eq!(rule.categories, vec![Category::Clarity]);
    }

    #[test]
    fn exact_code_extension_registers() {
        let config: Config = toml::from_str(
            r#"
            [[extensions]]
            tool = "custom"
            codes = ["Z100"]
            categories = ["Performance"]
            "#,
        )
        .unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry.lookup("Z100").unwrap().tool, "custom");
        assert!(registry.lookup("Z101").is_none());
    }

    #[test]
    fn extension_without_matcher_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [[extensions]]
            tool = "broken"
            "#,
        )
        .unwrap();
        assert!(matches!(config.registry(), Err(ReportError::Config(_))));
    }

    #[test]
    fn bug_risk_category_round_trips_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [[extensions]]
            tool = "risky"
            prefix = "R"
            categories = ["Bug Risk"]
            "#,
        )
        .unwrap();
        assert_eq!(config.extensions[0].categories, vec![Category::BugRisk]);
    }
}
