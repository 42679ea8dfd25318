//! # Field Extractor - Payload Decoding
//!
//! ## Purpose
//!
//! Runs the [`TlvScanner`] once over the full payload and dispatches each
//! top-level tag to its semantic field on [`QrPayload`], recursing into the
//! nested template decoder for the merchant-account family (26/27/28) and
//! the additional-data template (62).
//!
//! ## Contract
//!
//! `decode` fails only on empty input. For any non-empty payload it returns
//! a best-effort record: absent or malformed fields stay empty strings,
//! unknown tags are ignored (forward compatibility), and a template whose
//! value yields no recognized sub-tags still does not fail the decode. The
//! checksum is the one field not taken from the generic scan — it must be
//! the final 4 characters, end-anchored behind the literal `6304` prefix.

use qrlink_types::QrPayload;
use tracing::debug;

use crate::constants::{
    CHECKSUM_CHARS, CHECKSUM_PREFIX, MERCHANT_ACCOUNT_TAGS, SUB_ACQUIRER_A, SUB_ACQUIRER_B, SUB_BANK_CODE,
    SUB_ORDER_REFERENCE, SUB_SHOP_ID, TAG_ADDITIONAL_DATA, TAG_AMOUNT, TAG_CHECKSUM,
    TAG_COUNTRY_CODE, TAG_CURRENCY, TAG_INIT_METHOD, TAG_MCC, TAG_MERCHANT_CITY,
    TAG_MERCHANT_NAME, TAG_VERSION,
};
use crate::error::{DecodeError, DecodeResult};
use crate::scanner::TlvScanner;

/// Decode a merchant-presented EMVCo QR payload into a structured record.
///
/// Duplicate tags follow a first-non-empty-wins policy in scan order; a
/// zero-length value counts as absent. Of the
/// merchant-account family only the first template encountered is decoded;
/// tag 62 is always decoded when present.
pub fn decode(payload: &str) -> DecodeResult<QrPayload> {
    if payload.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut record = QrPayload {
        raw_payload: payload.to_string(),
        ..QrPayload::default()
    };
    let mut account_template_done = false;

    for field in TlvScanner::new(payload) {
        match field.tag {
            TAG_VERSION => set_if_empty(&mut record.version, field.value),
            TAG_INIT_METHOD => set_if_empty(&mut record.init_method, field.value),
            TAG_MCC => set_if_empty(&mut record.merchant_category_code, field.value),
            TAG_CURRENCY => set_if_empty(&mut record.currency, field.value),
            TAG_AMOUNT => set_if_empty(&mut record.amount, field.value),
            TAG_COUNTRY_CODE => set_if_empty(&mut record.country_code, field.value),
            TAG_MERCHANT_NAME => set_if_empty(&mut record.merchant_name, field.value.trim()),
            TAG_MERCHANT_CITY => set_if_empty(&mut record.merchant_city, field.value.trim()),
            TAG_ADDITIONAL_DATA => decode_additional_data(field.value, &mut record),
            // End-anchored, not taken from the scan; see extract_checksum.
            TAG_CHECKSUM => {}
            tag if MERCHANT_ACCOUNT_TAGS.contains(&tag) => {
                if !account_template_done {
                    decode_account_template(field.value, &mut record);
                    account_template_done = true;
                } else {
                    debug!(tag, "skipping later merchant-account template");
                }
            }
            tag => debug!(tag, "ignoring unrecognized top-level tag"),
        }
    }

    if let Some(checksum) = extract_checksum(payload) {
        record.checksum = checksum.to_string();
    }

    Ok(record)
}

/// Nested decode of a merchant-account-info template (tags 26/27/28).
fn decode_account_template(value: &str, record: &mut QrPayload) {
    for sub in TlvScanner::new(value) {
        match sub.tag {
            SUB_BANK_CODE => set_if_empty(&mut record.bank_code, sub.value),
            SUB_SHOP_ID => set_if_empty(&mut record.shop_id, sub.value),
            _ => {}
        }
    }
}

/// Nested decode of the additional-data template (tag 62).
///
/// Sub-tags 03 and 05 both plausibly carry the acquirer reference; they are
/// kept as raw candidates here and resolved later by
/// [`crate::resolver::resolve_acquirer_reference`].
fn decode_additional_data(value: &str, record: &mut QrPayload) {
    for sub in TlvScanner::new(value) {
        match sub.tag {
            SUB_ORDER_REFERENCE => set_if_empty(&mut record.order_reference, sub.value),
            SUB_ACQUIRER_A => set_if_empty(&mut record.acquirer_candidate_a, sub.value),
            SUB_ACQUIRER_B => set_if_empty(&mut record.acquirer_candidate_b, sub.value),
            _ => {}
        }
    }
}

/// Pull the trailing checksum if and only if the payload ends with the
/// literal `6304` followed by exactly 4 uppercase-hex characters. Anything
/// after tag 63's value means no recognized checksum.
///
/// Shared with the validator, which reports the same shape as
/// `InvalidChecksumFormat` when absent.
pub(crate) fn extract_checksum(payload: &str) -> Option<&str> {
    let bytes = payload.as_bytes();
    let tail_len = CHECKSUM_PREFIX.len() + CHECKSUM_CHARS;
    if bytes.len() < tail_len {
        return None;
    }
    let tail = &bytes[bytes.len() - tail_len..];
    if &tail[..CHECKSUM_PREFIX.len()] != CHECKSUM_PREFIX.as_bytes() {
        return None;
    }
    if !tail[CHECKSUM_PREFIX.len()..]
        .iter()
        .all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
    {
        return None;
    }
    // The tail is all ASCII, so this byte slice sits on char boundaries.
    Some(&payload[payload.len() - CHECKSUM_CHARS..])
}

/// First non-empty occurrence wins for repeated tags.
fn set_if_empty(slot: &mut String, value: &str) {
    if slot.is_empty() && !value.is_empty() {
        *slot = value.to_string();
    }
}
