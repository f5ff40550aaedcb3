//! API route handlers
//!
//! - `analysis`: excerpt detection over two texts
//! - `health`: liveness and Prometheus metrics
//!
//! Every other path falls through to the static asset directory.

pub mod analysis;
pub mod health;

use crate::error::ServerError;
use serde::{Deserialize, Serialize};

/// Success envelope wrapping every API payload
///
/// ```json
/// { "ok": true, "data": { "...": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// 405 handler for API routes hit with the wrong method
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
