//! # QRLink Unified Types Library
//!
//! Pure data structures shared across the QRLink system. This crate holds
//! no decoding or construction logic:
//!
//! - **Decoded records**: [`QrPayload`], the immutable result of one decode
//!   pass over a merchant-presented EMVCo QR payload.
//! - **Deep-link types**: [`DeepLinkOptions`], [`DeepLinkResult`], and the
//!   [`PaymentType`] code registry consumed by the deep-link builder.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → services_v2/
//!     ↑            ↓             ↓
//! Pure Data   Decode/Build   HTTP JSON API
//! Structures  Rules          Transport
//! ```
//!
//! Everything here derives serde traits because the API service ships these
//! types verbatim as JSON.

pub mod deeplink;
pub mod payload;

pub use deeplink::{DeepLinkOptions, DeepLinkResult, PaymentType};
pub use payload::QrPayload;
