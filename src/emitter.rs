// src/emitter.rs
//! Streaming JSON array writer for CodeClimate issues.
//!
//! The emitter is a single-use state machine: `start` writes the opening
//! bracket, each `handle` classifies one violation and appends one issue
//! object, `stop` closes the array. Nothing is buffered beyond the issue
//! currently being serialized, so arbitrarily large reports stream in
//! constant memory. Calls out of order are lifecycle errors, not silent
//! no-ops.

use std::io::Write;

use crate::classify::Classifier;
use crate::error::{ReportError, Result};
use crate::fingerprint::fingerprint;
use crate::types::{Issue, Lines, Location, Violation};

const INDENT: &str = "    ";

/// Emitter lifecycle. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    NotStarted,
    Started,
    Stopped,
}

/// How issue descriptions are rendered. Two historical formats exist; the
/// suffixed one appends the rule code so readers can look it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionStyle {
    /// The violation message verbatim.
    Plain,
    /// The violation message followed by ` [CODE]`.
    #[default]
    Suffixed,
}

/// Writes a sequence of violations as one JSON array of issue objects.
///
/// The sink is caller-supplied and caller-owned; the emitter never opens or
/// closes it. Write failures propagate immediately and leave the emitter
/// unusable (any partial output stays as written).
pub struct IssueEmitter<W: Write> {
    sink: W,
    classifier: Classifier,
    style: DescriptionStyle,
    state: EmitterState,
    wrote_issue: bool,
}

impl<W: Write> IssueEmitter<W> {
    #[must_use]
    pub fn new(sink: W, classifier: Classifier, style: DescriptionStyle) -> Self {
        Self {
            sink,
            classifier,
            style,
            state: EmitterState::NotStarted,
            wrote_issue: false,
        }
    }

    /// Opens the JSON array.
    ///
    /// # Errors
    /// Returns a lifecycle error unless the emitter is fresh, or an I/O
    /// error if the sink write fails.
    pub fn start(&mut self) -> Result<()> {
        self.guard("start", EmitterState::NotStarted)?;
        self.sink.write_all(b"[")?;
        self.state = EmitterState::Started;
        Ok(())
    }

    /// Classifies one violation and appends its issue object.
    ///
    /// # Errors
    /// Returns a lifecycle error unless `start` has run (and `stop` has
    /// not), or an I/O error if the sink write fails.
    pub fn handle(&mut self, v: &Violation) -> Result<()> {
        self.guard("handle", EmitterState::Started)?;

        let issue = self.build_issue(v);
        let json = serde_json::to_string(&issue)?;

        if self.wrote_issue {
            self.sink.write_all(b",")?;
        }
        self.sink.write_all(b"\n")?;
        self.sink.write_all(INDENT.as_bytes())?;
        self.sink.write_all(json.as_bytes())?;
        self.wrote_issue = true;
        Ok(())
    }

    /// Closes the JSON array and flushes the sink. After this the output is
    /// a syntactically complete array whether 0, 1, or N issues were handled.
    ///
    /// # Errors
    /// Returns a lifecycle error unless the emitter is started, or an I/O
    /// error if the sink write fails.
    pub fn stop(&mut self) -> Result<()> {
        self.guard("stop", EmitterState::Started)?;
        if self.wrote_issue {
            self.sink.write_all(b"\n")?;
        }
        self.sink.write_all(b"]\n")?;
        self.sink.flush()?;
        self.state = EmitterState::Stopped;
        Ok(())
    }

    /// Builds the issue record for one violation without writing it.
    #[must_use]
    pub fn build_issue(&self, v: &Violation) -> Issue {
        let description = match self.style {
            DescriptionStyle::Plain => v.text.clone(),
            DescriptionStyle::Suffixed => format!("{} [{}]", v.text, v.code),
        };

        Issue {
            kind: "issue",
            check_name: self.classifier.check_name(v).to_string(),
            description,
            categories: self.classifier.categories(v),
            location: Location {
                path: v.filename.clone(),
                lines: Lines {
                    begin: v.line_number,
                    end: v.line_number,
                },
            },
            fingerprint: fingerprint(v),
            severity: self.classifier.severity(v),
        }
    }

    fn guard(&self, op: &'static str, expected: EmitterState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ReportError::Lifecycle { op, state: self.state })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter(buf: &mut Vec<u8>) -> IssueEmitter<&mut Vec<u8>> {
        IssueEmitter::new(buf, Classifier::default(), DescriptionStyle::Suffixed)
    }

    fn violation(code: &str, line: u32) -> Violation {
        Violation::new(code, "./examples/hello-world.py", line, None, "some message")
    }

    fn parse(buf: &[u8]) -> serde_json::Value {
        serde_json::from_slice(buf).expect("emitter output must be valid JSON")
    }

    #[test]
    fn zero_issues_yields_empty_array() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        e.start().unwrap();
        e.stop().unwrap();
        assert_eq!(buf, b"[]\n");
        assert_eq!(parse(&buf), serde_json::json!([]));
    }

    #[test]
    fn single_issue_array_is_valid_json() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        e.start().unwrap();
        e.handle(&violation("E302", 23)).unwrap();
        e.stop().unwrap();

        let value = parse(&buf);
        let issues = value.as_array().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0]["type"], "issue");
        assert_eq!(issues[0]["check_name"], "pycodestyle");
        assert_eq!(issues[0]["severity"], "major");
        assert_eq!(issues[0]["location"]["path"], "./examples/hello-world.py");
        assert_eq!(issues[0]["location"]["lines"]["begin"], 23);
        assert_eq!(issues[0]["location"]["lines"]["end"], 23);
    }

    #[test]
    fn issues_keep_arrival_order_with_commas() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        e.start().unwrap();
        for (code, line) in [("E302", 1), ("X111", 2), ("C901", 3)] {
            e.handle(&violation(code, line)).unwrap();
        }
        e.stop().unwrap();

        let value = parse(&buf);
        let issues = value.as_array().unwrap();
        assert_eq!(issues.len(), 3);
        let names: Vec<_> = issues.iter().map(|i| i["check_name"].as_str().unwrap()).collect();
        assert_eq!(names, ["pycodestyle", "unknown", "mccabe"]);
    }

    #[test]
    fn every_issue_has_all_seven_keys() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        e.start().unwrap();
        e.handle(&violation("S102", 42)).unwrap();
        e.stop().unwrap();

        let value = parse(&buf);
        let obj = value[0].as_object().unwrap();
        for key in [
            "type", "check_name", "description", "categories", "location", "fingerprint",
            "severity",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj["fingerprint"].as_str().unwrap().len(), 40);
    }

    #[test]
    fn entries_are_indented_one_per_line() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        e.start().unwrap();
        e.handle(&violation("E302", 1)).unwrap();
        e.handle(&violation("E303", 2)).unwrap();
        e.stop().unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("[\n    {"));
        assert!(text.contains("},\n    {"));
        assert!(text.ends_with("}\n]\n"));
    }

    #[test]
    fn plain_style_omits_code_suffix() {
        let plain = IssueEmitter::new(Vec::new(), Classifier::default(), DescriptionStyle::Plain);
        let issue = plain.build_issue(&violation("E302", 1));
        assert_eq!(issue.description, "some message");

        let mut buf = Vec::new();
        let suffixed = emitter(&mut buf).build_issue(&violation("E302", 1));
        assert_eq!(suffixed.description, "some message [E302]");
    }

    #[test]
    fn handle_before_start_is_a_lifecycle_error() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        let err = e.handle(&violation("E302", 1)).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Lifecycle { op: "handle", state: EmitterState::NotStarted }
        ));
    }

    #[test]
    fn handle_after_stop_is_a_lifecycle_error() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        e.start().unwrap();
        e.stop().unwrap();
        let err = e.handle(&violation("E302", 1)).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Lifecycle { op: "handle", state: EmitterState::Stopped }
        ));
    }

    #[test]
    fn double_start_is_a_lifecycle_error() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        e.start().unwrap();
        let err = e.start().unwrap_err();
        assert!(matches!(err, ReportError::Lifecycle { op: "start", .. }));
    }

    #[test]
    fn stop_without_start_is_a_lifecycle_error() {
        let mut buf = Vec::new();
        let mut e = emitter(&mut buf);
        let err = e.stop().unwrap_err();
        assert!(matches!(err, ReportError::Lifecycle { op: "stop", .. }));
    }

    #[test]
    fn sink_write_failure_propagates() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink gone"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut e = IssueEmitter::new(
            FailingSink,
            Classifier::default(),
            DescriptionStyle::Suffixed,
        );
        assert!(matches!(e.start().unwrap_err(), ReportError::Io(_)));
    }
}
