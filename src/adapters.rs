// src/adapters.rs
//! Text-line input adapters.
//!
//! Existing flake8 reports come in two line formats:
//!
//! - default: `path:line:col: CODE text`
//! - pylint:  `path:line: [CODE] text`
//!
//! Both parse into the same [`Violation`] shape the checker engine would
//! produce. Lines matching neither format are not errors; callers skip and
//! count them.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Violation;

// %(path)s:%(row)d:%(col)d: %(code)s %(text)s
static DEFAULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^ ]+):([0-9]+):([0-9]+): ([^ ]+) (.+)$").expect("invalid default-format regex")
});

// %(path)s:%(row)d: [%(code)s] %(text)s
static PYLINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^ ]+):([0-9]+): \[([^ ]+)\] (.+)$").expect("invalid pylint-format regex")
});

/// Which line format(s) to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// Try default first, then pylint, per line.
    #[default]
    Auto,
    Default,
    Pylint,
}

/// Parses a line in flake8's default output format.
#[must_use]
pub fn parse_default_line(line: &str) -> Option<Violation> {
    let caps = DEFAULT_RE.captures(line.trim())?;
    Some(Violation::new(
        &caps[4],
        &caps[1],
        caps[2].parse().ok()?,
        Some(caps[3].parse().ok()?),
        &caps[5],
    ))
}

/// Parses a line in flake8's pylint output format. The pylint format has no
/// column, so `column_number` is absent.
#[must_use]
pub fn parse_pylint_line(line: &str) -> Option<Violation> {
    let caps = PYLINT_RE.captures(line.trim())?;
    Some(Violation::new(
        &caps[3],
        &caps[1],
        caps[2].parse().ok()?,
        None,
        &caps[4],
    ))
}

/// Parses one report line according to `format`. Returns `None` for lines
/// that match no accepted pattern.
#[must_use]
pub fn parse_line(line: &str, format: InputFormat) -> Option<Violation> {
    match format {
        InputFormat::Auto => parse_default_line(line).or_else(|| parse_pylint_line(line)),
        InputFormat::Default => parse_default_line(line),
        InputFormat::Pylint => parse_pylint_line(line),
    }
}
