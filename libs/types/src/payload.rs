//! Decoded EMVCo QR payload record.
//!
//! One [`QrPayload`] is produced per decode call and never mutated after the
//! decode returns. Absent or unrecognized fields stay empty strings rather
//! than `Option`s: the payload grammar has no notion of an explicit null,
//! and the deep-link builder treats empty as "omit the parameter".

use serde::{Deserialize, Serialize};

/// Structured view of a merchant-presented EMVCo QR payload.
///
/// Field ↔ tag mapping:
///
/// | Field | Tag |
/// |---|---|
/// | `version` / `init_method` | 00 / 01 |
/// | `merchant_category_code` / `currency` / `amount` / `country_code` | 52 / 53 / 54 / 58 |
/// | `merchant_name` / `merchant_city` | 59 / 60 (whitespace-trimmed) |
/// | `bank_code` / `shop_id` | sub-tags 01 / 03 of the first of 26/27/28 |
/// | `order_reference` | sub-tag 01 of 62 |
/// | `acquirer_candidate_a` / `acquirer_candidate_b` | sub-tags 03 / 05 of 62, kept raw |
/// | `checksum` | tag 63, end-anchored, 4 uppercase hex chars |
///
/// `amount` is deliberately a string: the original digit and decimal-point
/// formatting must survive into the generated deep link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub version: String,
    pub init_method: String,
    pub merchant_category_code: String,
    pub currency: String,
    pub amount: String,
    pub country_code: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub shop_id: String,
    pub bank_code: String,
    pub order_reference: String,
    pub acquirer_candidate_a: String,
    pub acquirer_candidate_b: String,
    pub checksum: String,
    /// Original input, retained verbatim for audit and link regeneration.
    pub raw_payload: String,
}
