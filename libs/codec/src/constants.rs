//! # Tag Registry - EMVCo Merchant-Presented QR Constants
//!
//! Central registry of the tags and literal prefixes the codec recognizes.
//! Tags are kept as 2-character strings because that is their wire shape;
//! the grammar has no binary representation to convert to.

/// Tag 00 - payload format version.
pub const TAG_VERSION: &str = "00";

/// Tag 01 - point-of-initiation method.
pub const TAG_INIT_METHOD: &str = "01";

/// Tag 52 - merchant category code (MCC).
pub const TAG_MCC: &str = "52";

/// Tag 53 - ISO 4217 numeric currency code.
pub const TAG_CURRENCY: &str = "53";

/// Tag 54 - transaction amount, preserved as decimal text.
pub const TAG_AMOUNT: &str = "54";

/// Tag 58 - ISO 3166 country code.
pub const TAG_COUNTRY_CODE: &str = "58";

/// Tag 59 - merchant name.
pub const TAG_MERCHANT_NAME: &str = "59";

/// Tag 60 - merchant city.
pub const TAG_MERCHANT_CITY: &str = "60";

/// Tag 62 - additional-data template (nested TLV stream).
pub const TAG_ADDITIONAL_DATA: &str = "62";

/// Tag 63 - trailing CRC checksum, end-anchored.
pub const TAG_CHECKSUM: &str = "63";

/// Merchant-account-info template family. Only the first of these tags
/// encountered in scan order is decoded.
pub const MERCHANT_ACCOUNT_TAGS: [&str; 3] = ["26", "27", "28"];

/// Sub-tag 01 of a merchant-account template - acquiring bank code.
pub const SUB_BANK_CODE: &str = "01";

/// Sub-tag 03 of a merchant-account template - shop identifier.
pub const SUB_SHOP_ID: &str = "03";

/// Sub-tag 01 of tag 62 - bill/order reference number.
pub const SUB_ORDER_REFERENCE: &str = "01";

/// Sub-tag 03 of tag 62 - first acquirer-info candidate.
pub const SUB_ACQUIRER_A: &str = "03";

/// Sub-tag 05 of tag 62 - second acquirer-info candidate.
pub const SUB_ACQUIRER_B: &str = "05";

/// Literal prefix of every well-formed payload: tag 00 with length 02.
pub const VERSION_PREFIX: &str = "0002";

/// Literal prefix of the trailing checksum record: tag 63 with length 04.
pub const CHECKSUM_PREFIX: &str = "6304";

/// Number of hex characters in the trailing checksum value.
pub const CHECKSUM_CHARS: usize = 4;

/// Minimum plausible payload length in characters.
pub const MIN_PAYLOAD_CHARS: usize = 50;

/// Tags that must be present for a payload to validate, with the labels
/// used in diagnostics.
pub const REQUIRED_TAGS: [(&str, &str); 5] = [
    (TAG_MCC, "merchant category code"),
    (TAG_CURRENCY, "currency code"),
    (TAG_COUNTRY_CODE, "country code"),
    (TAG_MERCHANT_NAME, "merchant name"),
    (TAG_MERCHANT_CITY, "merchant city"),
];
