//! Verbatim Server - HTTP API for excerpt detection
//!
//! A thin HTTP layer around [`matcher`]: it decodes and validates two texts,
//! calls the analysis directly from the handler and wraps the outcome in a
//! JSON envelope. It also serves the static front-end.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /analysis` - body `{"input_text": "...", "ref_text": "..."}`,
//!   answers `{"ok": true, "data": {"matches": [...]}}`
//! - `GET /health` - Liveness probe
//! - `GET /metrics` - Prometheus metrics (when enabled)
//! - anything else - files from `static_dir`
//!
//! Failures answer `{"ok": false, "error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
