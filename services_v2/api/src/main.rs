//! QRLink API Binary
//!
//! Standalone HTTP service exposing the codec over JSON: parse, validate,
//! and deep-link generation endpoints plus a health probe.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;

#[derive(Parser)]
#[command(name = "qrlink-api")]
#[command(about = "EMVCo QR decoding and GCash deep-link HTTP API")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 9000)]
    port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let addr = SocketAddr::new(args.host, args.port);
    info!("🚀 Starting QRLink API on {}", addr);
    info!("Endpoints: POST /api/parse, POST /api/generate, POST /api/validate, GET /health");

    warp::serve(routes::api()).run(addr).await;

    Ok(())
}
