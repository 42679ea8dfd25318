//! # Structural Validator - Payload Well-Formedness Checks
//!
//! ## Purpose
//!
//! Independent, lighter-weight pass over the raw payload string. It does
//! not depend on a successful decode, so it can still report useful
//! diagnostics on a payload the field extractor could only partially
//! recover. Checks accumulate: one failing check never stops the others
//! from running, with the single exception of empty input, which
//! short-circuits with exactly one diagnostic.
//!
//! The required-tag check is a lightweight presence probe (tag followed by
//! two digits somewhere in the payload), not a full nested decode — the
//! point is cheap triage, not semantics.

use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::constants::{MIN_PAYLOAD_CHARS, REQUIRED_TAGS, VERSION_PREFIX};
use crate::decoder::extract_checksum;

/// One structural diagnostic. Rendered to a human-readable string for the
/// API; never a crash or unrecoverable fault for any input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("QR payload must not be empty")]
    EmptyInput,

    #[error("QR payload is too short to be a merchant-presented code")]
    PayloadTooShort,

    #[error("QR payload must begin with the version tag prefix 0002")]
    MissingVersionPrefix,

    #[error("missing required tag {tag} ({label})")]
    MissingRequiredTag {
        tag: &'static str,
        label: &'static str,
    },

    #[error("checksum tag 63 is missing or not the final 4 hex characters")]
    InvalidChecksumFormat,
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of a validation pass: `valid` is true iff no check failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Diagnostics rendered to display strings, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validate that a payload is structurally usable. Never fails to return.
pub fn validate(payload: &str) -> ValidationReport {
    if payload.is_empty() {
        return ValidationReport {
            valid: false,
            errors: vec![ValidationIssue::EmptyInput],
        };
    }

    let mut errors = Vec::new();

    if payload.chars().count() < MIN_PAYLOAD_CHARS {
        errors.push(ValidationIssue::PayloadTooShort);
    }

    if !payload.starts_with(VERSION_PREFIX) {
        errors.push(ValidationIssue::MissingVersionPrefix);
    }

    for (tag, label) in REQUIRED_TAGS {
        if !has_tag_marker(payload, tag) {
            errors.push(ValidationIssue::MissingRequiredTag { tag, label });
        }
    }

    if extract_checksum(payload).is_none() {
        errors.push(ValidationIssue::InvalidChecksumFormat);
    }

    if !errors.is_empty() {
        debug!(error_count = errors.len(), "payload failed structural validation");
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// True when `tag` appears anywhere followed by two decimal digits.
fn has_tag_marker(payload: &str, tag: &str) -> bool {
    payload.match_indices(tag).any(|(idx, matched)| {
        let mut following = payload[idx + matched.len()..].chars();
        matches!(
            (following.next(), following.next()),
            (Some(a), Some(b)) if a.is_ascii_digit() && b.is_ascii_digit()
        )
    })
}
