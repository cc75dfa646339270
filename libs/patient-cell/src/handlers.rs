use std::sync::Arc;
use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use shared_database::ClinicStore;
use shared_models::error::AppError;

use crate::models::{IntakeRequest, IntakeResponse};
use crate::services::IntakeService;

#[axum::debug_handler]
pub async fn intake_patient(
    State(store): State<Arc<ClinicStore>>,
    WithRejection(Json(request), _): WithRejection<Json<IntakeRequest>, AppError>,
) -> Result<Json<IntakeResponse>, AppError> {
    let service = IntakeService::new(&store);

    let response = service.intake_patient(request)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(response))
}
