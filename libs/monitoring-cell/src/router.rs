// =====================================================================================
// MONITORING CELL ROUTER
// =====================================================================================

use axum::{routing::get, Router};

use crate::handlers::get_health_status;

pub fn create_monitoring_router() -> Router {
    Router::new().route("/health", get(get_health_status))
}
