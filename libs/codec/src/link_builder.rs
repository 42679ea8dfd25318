//! # Deep-Link Builder - GCash Payment Link Construction
//!
//! ## Purpose
//!
//! Fluent builder that turns a decoded [`QrPayload`] plus caller-supplied
//! [`DeepLinkOptions`] into a `gcash://` payment deep link. All
//! default-filling lives here — the decoder never fabricates values — and
//! this is the one consumer of the acquirer-reference resolver.
//!
//! ## Parameter Order
//!
//! The GCash app is sensitive to query parameter order, so the query string
//! is assembled by hand in the fixed sequence it expects rather than
//! through a map: qrCode, merchantId?, bizNo, orderAmount, merchantName,
//! shopId?, qrCodeFormat, tfrbnkcode?, clientId, param3, param5?,
//! tfrAcctNo?, acqInfo?, sub, lucky?, then the optional redirect/notify and
//! descriptive parameters.

use std::collections::HashMap;

use chrono::Utc;
use qrlink_types::{DeepLinkOptions, DeepLinkResult, PaymentType, QrPayload};
use tracing::warn;

use crate::decoder::decode;
use crate::error::DeepLinkError;
use crate::resolver::resolve_acquirer_reference;
use crate::validation::validate;

/// Scheme, host, and app id of the GCash P2M payment entry point.
pub const GCASH_BASE_URL: &str = "gcash://com.mynt.gcash/app/006300000800";

/// Client id used when the caller does not supply one.
pub const DEFAULT_CLIENT_ID: &str = "2023062916065505394208";

const QR_CODE_FORMAT: &str = "EMVCO";
const SUB_APP: &str = "p2mpay";

/// Network/route prefix of the `param3` slot; the payment-type code is
/// appended after three empty `~` positions.
const PARAM3_PREFIX: &str = "99960005~ph.ppmi.p2m";

/// Builder for GCash payment deep links.
pub struct DeepLinkBuilder<'a> {
    payload: &'a QrPayload,
    options: DeepLinkOptions,
}

impl<'a> DeepLinkBuilder<'a> {
    /// Build from a decoded record with default options.
    pub fn new(payload: &'a QrPayload) -> Self {
        Self {
            payload,
            options: DeepLinkOptions::default(),
        }
    }

    /// Build from a decoded record with pre-populated options.
    pub fn with_options(payload: &'a QrPayload, options: DeepLinkOptions) -> Self {
        Self { payload, options }
    }

    /// Set the merchant order id; also flips the default payment type to
    /// [`PaymentType::Dynamic`].
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.options.order_id = order_id.into();
        self
    }

    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.options.merchant_id = merchant_id.into();
        self
    }

    pub fn with_payment_type(mut self, payment_type: PaymentType) -> Self {
        self.options.payment_type = Some(payment_type);
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.options.client_id = client_id.into();
        self
    }

    /// Post-payment browser redirect; emitted as both `redirectUrl` and
    /// `returnUrl` for app-version compatibility.
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.options.redirect_url = url.into();
        self
    }

    /// Server-to-server callback; emitted as both `notifyUrl` and
    /// `callbackUrl`.
    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.options.notify_url = url.into();
        self
    }

    pub fn with_lucky(mut self, lucky: bool) -> Self {
        self.options.lucky = Some(lucky);
        self
    }

    /// Fill defaults, assemble the query string, and emit the final link.
    pub fn build(mut self) -> DeepLinkResult {
        self.fill_defaults();
        let query = self.build_query();

        DeepLinkResult {
            success: true,
            deep_link: Some(format!("{GCASH_BASE_URL}?{query}")),
            parsed_data: Some(self.payload.clone()),
            options: Some(self.options),
            error: None,
            generated_at: Utc::now(),
        }
    }

    fn fill_defaults(&mut self) {
        if self.options.qr_code.is_empty() {
            self.options.qr_code = self.payload.raw_payload.clone();
        }
        if self.options.order_amount.is_empty() {
            self.options.order_amount = self.payload.amount.clone();
        }
        if self.options.client_id.is_empty() {
            self.options.client_id = DEFAULT_CLIENT_ID.to_string();
        }
        if self.options.payment_type.is_none() {
            self.options.payment_type = Some(if self.options.order_id.is_empty() {
                PaymentType::Standard
            } else {
                PaymentType::Dynamic
            });
        }
        if self.options.shop_id.is_empty() {
            self.options.shop_id = self.payload.shop_id.clone();
        }
        if self.options.merchant_name.is_empty() {
            self.options.merchant_name = self.payload.merchant_name.clone();
        }
        if self.options.biz_no.is_empty() {
            self.options.biz_no = "null".to_string();
        }
    }

    fn build_query(&self) -> String {
        let opts = &self.options;
        let payment_type = opts.payment_type.unwrap_or_default();
        let acq_info = resolve_acquirer_reference(
            &self.payload.acquirer_candidate_a,
            &self.payload.acquirer_candidate_b,
        );

        let mut params: Vec<String> = Vec::new();
        let mut push = |key: &str, value: &str| params.push(format!("{key}={}", escape(value)));

        push("qrCode", &opts.qr_code);
        if !opts.merchant_id.is_empty() {
            push("merchantId", &opts.merchant_id);
        }
        push("bizNo", &opts.biz_no);
        push("orderAmount", &opts.order_amount);
        push("merchantName", &opts.merchant_name);
        if !opts.shop_id.is_empty() {
            push("shopId", &opts.shop_id);
        }
        push("qrCodeFormat", QR_CODE_FORMAT);
        if !self.payload.bank_code.is_empty() {
            push("tfrbnkcode", &self.payload.bank_code);
        }
        push("clientId", &opts.client_id);
        push(
            "param3",
            &format!("{PARAM3_PREFIX}~~~{}", payment_type.code()),
        );
        if !opts.shop_id.is_empty() {
            push(
                "param5",
                &format!("{}~{}~~~{acq_info}", opts.shop_id, opts.order_id),
            );
            push("tfrAcctNo", &opts.shop_id);
        }
        if !acq_info.is_empty() {
            push("acqInfo", acq_info);
        }
        push("sub", SUB_APP);
        if let Some(lucky) = opts.lucky {
            push("lucky", if lucky { "true" } else { "false" });
        }

        // Optional descriptive and callback parameters, appended last.
        if !opts.merchant_city.is_empty() {
            push("merchantCity", &opts.merchant_city);
        }
        if !opts.merchant_category_code.is_empty() {
            push("merchantCategoryCode", &opts.merchant_category_code);
        }
        if !opts.redirect_url.is_empty() {
            push("redirectUrl", &opts.redirect_url);
            push("returnUrl", &opts.redirect_url);
        }
        if !opts.notify_url.is_empty() {
            push("notifyUrl", &opts.notify_url);
            push("callbackUrl", &opts.notify_url);
        }
        if !opts.order_id.is_empty() {
            push("orderId", &opts.order_id);
        }

        params.join("&")
    }
}

/// Decode, validate, and build in one step. The payload must pass the
/// structural validator; diagnostics are joined into the error.
pub fn generate_with_validation(
    qr_payload: &str,
    options: DeepLinkOptions,
) -> Result<DeepLinkResult, DeepLinkError> {
    let record = decode(qr_payload)?;
    let report = validate(qr_payload);
    if !report.valid {
        warn!(
            errors = report.errors.len(),
            "refusing to build deep link for invalid payload"
        );
        return Err(DeepLinkError::InvalidPayload(
            report.messages().join("; "),
        ));
    }
    Ok(DeepLinkBuilder::with_options(&record, options).build())
}

/// Build the common link variants for one decoded record: a minimal link,
/// a dynamic-payment link with a generated order id, and a dynamic link
/// with redirect/notify callbacks wired to placeholder endpoints.
pub fn generate_strategies(record: &QrPayload) -> HashMap<&'static str, String> {
    let mut strategies = HashMap::new();
    let order_id = format!("ORDER-{}", Utc::now().timestamp());

    if let Some(link) = DeepLinkBuilder::new(record)
        .with_payment_type(PaymentType::Standard)
        .build()
        .deep_link
    {
        strategies.insert("minimal", link);
    }

    if let Some(link) = DeepLinkBuilder::new(record)
        .with_payment_type(PaymentType::Dynamic)
        .with_order_id(order_id.clone())
        .build()
        .deep_link
    {
        strategies.insert("dynamic", link);
    }

    if let Some(link) = DeepLinkBuilder::new(record)
        .with_payment_type(PaymentType::Dynamic)
        .with_order_id(order_id)
        .with_redirect_url("https://yourdomain.com/payment/success")
        .with_notify_url("https://yourdomain.com/api/gcash/notify")
        .build()
        .deep_link
    {
        strategies.insert("with_callback", link);
    }

    strategies
}

/// Query-escape one parameter value (space becomes `+`, reserved
/// characters become percent sequences).
fn escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
