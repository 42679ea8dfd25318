//! End-to-End Test Support for QRLink
//!
//! Shared fixtures for exercising the whole pipeline: raw payload in,
//! decoded record, structural validation, and deep link out.

pub mod fixtures;

pub use fixtures::*;
