// =====================================================================================
// MONITORING CELL - LIVENESS
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;

pub use models::{HealthResponse, HealthStatus};
pub use router::create_monitoring_router;
