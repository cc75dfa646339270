// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use shared_database::ClinicStore;
use shared_models::error::AppError;
use shared_models::Appointment;

use crate::models::{AppointmentError, BookAppointmentRequest, BookAppointmentResponse};
use crate::services::booking::AppointmentBookingService;

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            AppointmentError::NotAvailable { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

/// Open slots in seed order.
#[axum::debug_handler]
pub async fn get_available_appointments(
    State(store): State<Arc<ClinicStore>>,
) -> Json<Vec<Appointment>> {
    let booking_service = AppointmentBookingService::new(&store);

    Json(booking_service.available_appointments().await)
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(store): State<Arc<ClinicStore>>,
    WithRejection(Path(appointment_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<BookAppointmentRequest>, AppError>,
) -> Result<Json<BookAppointmentResponse>, AppError> {
    let booking_service = AppointmentBookingService::new(&store);

    let appointment = booking_service
        .book_appointment(appointment_id, request)
        .await?;

    Ok(Json(BookAppointmentResponse::confirmed(appointment)))
}
