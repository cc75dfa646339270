// =====================================================================================
// MONITORING CELL HANDLERS
// =====================================================================================

use axum::Json;
use tracing::{debug, instrument};

use crate::models::HealthResponse;

/// Liveness check. The service has no dependencies to check once seed data is loaded.
#[instrument]
pub async fn get_health_status() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse::ok())
}
