//! Microbe Game · diagnostic case backend
//!
//! - Axum HTTP + WebSocket API for playing diagnostic cases
//! - Case-progress validation engine (samples, ordered test groups, organism)
//! - In-memory credit ledger of completed cases per user
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT               : u16 (default 3000)
//!   CASE_CATALOG_PATH  : path to TOML case catalog (bacteria, tests, cases)
//!   IMAGE_BASE_URL     : prefix for completion images (default "/images")
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"
//!
//! Identity comes from the upstream auth layer via `x-user-id` / `x-user-admin`.

mod telemetry;
mod util;
mod domain;
mod error;
mod config;
mod seeds;
mod credits;
mod identity;
mod state;
mod protocol;
mod engine;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::config::ServiceConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = ServiceConfig::from_env();

  // Immutable case catalog + credit ledger.
  let state = Arc::new(AppState::new(&cfg));

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
  let listener = TcpListener::bind(addr).await?;
  info!(target: "microbe_game", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
