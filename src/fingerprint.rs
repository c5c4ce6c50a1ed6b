// src/fingerprint.rs
//! Stable content fingerprints for issue tracking.
//!
//! Dashboards use the fingerprint to recognize the same issue across runs,
//! so it must be a pure function of the violation's fields: equal field
//! tuples hash equal, any field difference changes the digest. No salting,
//! no randomness.

use sha1::{Digest, Sha1};

use crate::types::Violation;

/// Placeholder for an absent optional field. Distinct from any digit string,
/// so `Some(n)` and `None` never collide.
const ABSENT: &str = "-";

/// Computes the 40-hex-char SHA-1 fingerprint of a violation.
///
/// The digest covers the ordered field tuple (code, filename, line_number,
/// column_number, text), space-joined. Field order is part of the contract;
/// reordering would silently re-identify every issue downstream.
#[must_use]
pub fn fingerprint(v: &Violation) -> String {
    let column = v
        .column_number
        .map_or_else(|| ABSENT.to_string(), |c| c.to_string());

    let tuple = format!(
        "{} {} {} {} {}",
        v.code, v.filename, v.line_number, column, v.text
    );

    let mut hasher = Sha1::new();
    hasher.update(tuple.as_bytes());
    format!("{:x}", hasher.finalize())
}
