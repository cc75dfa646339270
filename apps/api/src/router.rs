use std::sync::Arc;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use appointment_cell::router::appointment_routes;
use monitoring_cell::router::create_monitoring_router;
use patient_cell::router::patient_routes;
use shared_config::AppConfig;
use shared_database::ClinicStore;

pub fn create_router(config: Arc<AppConfig>, store: Arc<ClinicStore>) -> Router {
    Router::new()
        .merge(create_monitoring_router())
        .merge(patient_routes(store.clone()))
        .nest("/appointments", appointment_routes(store))
        .merge(ui_routes(&config))
}

/// Single-page intake UI and its assets.
fn ui_routes(config: &AppConfig) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(config.index_file()))
        .nest_service("/static", ServeDir::new(&config.static_dir))
}
