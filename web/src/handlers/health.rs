//! Health check endpoint.
//!
//! Used by load balancers and monitoring systems to verify the service is up.

use super::{respond, Enveloped};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process serves requests
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Simple health check endpoint (for basic liveness).
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "message": { "status": "ok", "version": "0.1.0" } }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> Enveloped<HealthStatus> {
    respond(
        StatusCode::OK,
        HealthStatus {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}
