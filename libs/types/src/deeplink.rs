//! Deep-link construction types: caller options, result envelope, and the
//! GCash payment-type code registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payload::QrPayload;

/// GCash payment-type codes carried in the deep link's `param3` slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    /// Standard P2M payment (`000`).
    #[default]
    #[serde(rename = "000")]
    Standard,
    /// Dynamic QR payment with an order id (`010`).
    #[serde(rename = "010")]
    Dynamic,
    /// Static QR payment (`001`).
    #[serde(rename = "001")]
    Static,
    /// Installment payment (`020`).
    #[serde(rename = "020")]
    Installment,
    /// Pre-authorization (`030`).
    #[serde(rename = "030")]
    PreAuth,
}

impl PaymentType {
    /// Wire code as it appears inside `param3`.
    pub fn code(self) -> &'static str {
        match self {
            PaymentType::Standard => "000",
            PaymentType::Dynamic => "010",
            PaymentType::Static => "001",
            PaymentType::Installment => "020",
            PaymentType::PreAuth => "030",
        }
    }
}

/// Caller-supplied knobs for deep-link generation.
///
/// Every field is optional; the builder fills defaults from the decoded
/// [`QrPayload`] (the decoder itself never fabricates defaults). Empty
/// strings mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeepLinkOptions {
    /// Raw QR payload echoed into the `qrCode` parameter; defaults to the
    /// decoded record's `raw_payload`.
    pub qr_code: String,
    /// Order amount; defaults to the decoded `amount`.
    pub order_amount: String,
    pub merchant_id: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub merchant_category_code: String,
    pub order_id: String,
    /// Defaults to `Dynamic` when an order id is supplied, else `Standard`.
    pub payment_type: Option<PaymentType>,
    pub redirect_url: String,
    pub notify_url: String,
    pub client_id: String,
    pub shop_id: String,
    pub biz_no: String,
    /// Raffle opt-in; the `lucky` parameter is only emitted when set.
    pub lucky: Option<bool>,
}

/// Envelope returned by deep-link generation, shaped for the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<QrPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<DeepLinkOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_type_codes_round_trip_through_serde() {
        for (ty, code) in [
            (PaymentType::Standard, "000"),
            (PaymentType::Dynamic, "010"),
            (PaymentType::Static, "001"),
            (PaymentType::Installment, "020"),
            (PaymentType::PreAuth, "030"),
        ] {
            assert_eq!(ty.code(), code);
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{code}\""));
            let back: PaymentType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn options_deserialize_with_missing_fields() {
        let options: DeepLinkOptions =
            serde_json::from_str(r#"{"orderId":"ORDER-1","paymentType":"010"}"#).unwrap();
        assert_eq!(options.order_id, "ORDER-1");
        assert_eq!(options.payment_type, Some(PaymentType::Dynamic));
        assert!(options.client_id.is_empty());
        assert_eq!(options.lucky, None);
    }
}
