//! # QRLink Codec - EMVCo QR Decoding and Validation Rules
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the QRLink system:
//! - TLV scanning/decoding logic for merchant-presented EMVCo QR payloads
//! - Structural payload validation with accumulated diagnostics
//! - Acquirer-reference resolution policy
//! - GCash deep-link construction
//! - Tag registry and protocol constants
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [qrlink-codec] → services_v2/
//!     ↑              ↓               ↓
//! Pure Data    Protocol Rules    HTTP JSON API
//! Structures   Decode/Validate   Transport
//! QrPayload    Link Construction Endpoints
//! ```
//!
//! ## Decoding Contract
//!
//! Every component is a pure function over an input string; nothing here
//! retains state between calls. [`decode`] fails only on empty input and
//! otherwise returns a best-effort [`qrlink_types::QrPayload`] — malformed
//! regions are skipped by the scanner's resynchronization policy, never
//! surfaced as errors. [`validate`] is the independent pass that decides
//! whether a payload is actually usable; it never fails to return a report.
//!
//! ## What This Crate Does NOT Contain
//! - Network transport or HTTP handling (belongs in services_v2/)
//! - Raw data structure definitions (belong in libs/types)
//! - CRC recomputation or signature verification (the trailing checksum is
//!   format-checked only)

pub mod constants;
pub mod decoder;
pub mod error;
pub mod link_builder;
pub mod resolver;
pub mod scanner;
pub mod validation;

// Re-export the public operations for convenience
pub use decoder::decode;
pub use error::{DecodeError, DecodeResult, DeepLinkError};
pub use link_builder::{
    generate_strategies, generate_with_validation, DeepLinkBuilder, GCASH_BASE_URL,
};
pub use resolver::resolve_acquirer_reference;
pub use scanner::{TlvField, TlvScanner};
pub use validation::{validate, ValidationIssue, ValidationReport};
