// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};

use shared_models::{Appointment, AppointmentStatus};

pub const BOOKING_CONFIRMATION: &str = "Appointment booked successfully";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    /// Not checked against registered patients.
    pub patient_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookAppointmentResponse {
    pub message: String,
    pub appointment: Appointment,
}

impl BookAppointmentResponse {
    pub fn confirmed(appointment: Appointment) -> Self {
        Self {
            message: BOOKING_CONFIRMATION.to_string(),
            appointment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Appointment not available")]
    NotAvailable { status: AppointmentStatus },
}
