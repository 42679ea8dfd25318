//! # API Routes - JSON Endpoints over the Codec
//!
//! ## Purpose
//!
//! Warp filters wiring HTTP requests to the codec library. Four endpoints:
//!
//! - `POST /api/parse`    - decode a payload into its structured record
//! - `POST /api/generate` - decode + validate + build a GCash deep link
//! - `POST /api/validate` - structural diagnostics only
//! - `GET  /health`       - liveness probe
//!
//! Handlers never panic on caller input: decode is total past the empty
//! check, validation accumulates diagnostics, and malformed request bodies
//! are rejected by warp's JSON body filter before a handler runs. CORS is
//! wide open; the service carries no state or credentials.

use chrono::Utc;
use qrlink_codec::{decode, generate_with_validation, validate};
use qrlink_types::{DeepLinkOptions, PaymentType, QrPayload};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

const SERVICE_NAME: &str = "QRLink GCash Deep Link API";

/// Request body shared by the parse and validate endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayloadRequest {
    #[serde(default)]
    qr_code: String,
}

/// Request body of the generate endpoint. Every field except the payload
/// is optional; absent options fall back to decoded-record defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    #[serde(default)]
    qr_code: String,
    #[serde(default)]
    order_id: String,
    #[serde(default)]
    merchant_id: String,
    #[serde(default)]
    redirect_url: String,
    #[serde(default)]
    notify_url: String,
    #[serde(default)]
    payment_type: Option<PaymentType>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<QrPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// The complete route tree, CORS included.
pub fn api() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_header("content-type");

    parse_route()
        .or(generate_route())
        .or(validate_route())
        .or(health_route())
        .with(cors)
}

fn parse_route() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "parse")
        .and(warp::post())
        .and(warp::body::json())
        .map(handle_parse)
}

fn generate_route() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "generate")
        .and(warp::post())
        .and(warp::body::json())
        .map(handle_generate)
}

fn validate_route() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "validate")
        .and(warp::post())
        .and(warp::body::json())
        .map(handle_validate)
}

fn health_route() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("health").and(warp::get()).map(handle_health)
}

fn handle_parse(req: PayloadRequest) -> impl Reply {
    match decode(&req.qr_code) {
        Ok(record) => {
            debug!(merchant = %record.merchant_name, "decoded payload");
            warp::reply::with_status(
                warp::reply::json(&ParseResponse {
                    success: true,
                    data: Some(record),
                    error: None,
                }),
                StatusCode::OK,
            )
        }
        Err(e) => {
            warn!(error = %e, "parse request rejected");
            warp::reply::with_status(
                warp::reply::json(&ParseResponse {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }),
                StatusCode::BAD_REQUEST,
            )
        }
    }
}

fn handle_generate(req: GenerateRequest) -> impl Reply {
    if req.qr_code.is_empty() {
        return warp::reply::with_status(
            warp::reply::json(&json!({
                "success": false,
                "error": "qrCode must not be empty",
            })),
            StatusCode::BAD_REQUEST,
        );
    }

    let options = DeepLinkOptions {
        order_id: req.order_id,
        merchant_id: req.merchant_id,
        redirect_url: req.redirect_url,
        notify_url: req.notify_url,
        payment_type: req.payment_type,
        ..DeepLinkOptions::default()
    };

    match generate_with_validation(&req.qr_code, options) {
        Ok(result) => warp::reply::with_status(warp::reply::json(&result), StatusCode::OK),
        Err(e) => {
            warn!(error = %e, "generate request rejected");
            warp::reply::with_status(
                warp::reply::json(&json!({
                    "success": false,
                    "error": e.to_string(),
                })),
                StatusCode::BAD_REQUEST,
            )
        }
    }
}

fn handle_validate(req: PayloadRequest) -> impl Reply {
    warp::reply::json(&validate(&req.qr_code))
}

fn handle_health() -> impl Reply {
    warp::reply::json(&json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "time": Utc::now().to_rfc3339(),
    }))
}
