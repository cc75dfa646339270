use std::sync::Arc;
use axum::{routing::post, Router};
use shared_database::ClinicStore;

use crate::handlers::*;

pub fn patient_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/intake", post(intake_patient))
        .with_state(store)
}
