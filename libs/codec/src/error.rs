//! Codec-level errors for QR decoding and deep-link generation.
//!
//! Note how small [`DecodeError`] is: malformed-but-non-empty payloads are
//! never a decode error. The scanner recovers from unparseable positions by
//! resynchronizing, and the question of whether the resulting record is
//! usable belongs to [`crate::validation`].

use thiserror::Error;

/// Errors from [`crate::decode`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("QR payload must not be empty")]
    EmptyInput,
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors from validated deep-link generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeepLinkError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("QR payload failed validation: {0}")]
    InvalidPayload(String),
}
