// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_database::ClinicStore;

use crate::handlers;

pub fn appointment_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/available", get(handlers::get_available_appointments))
        .route("/{appointment_id}/book", post(handlers::book_appointment))
        .with_state(store)
}
