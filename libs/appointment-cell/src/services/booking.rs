// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::{BookingError, ClinicStore};
use shared_models::Appointment;

use crate::models::{AppointmentError, BookAppointmentRequest};

pub struct AppointmentBookingService {
    store: Arc<ClinicStore>,
}

impl AppointmentBookingService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: store.clone(),
        }
    }

    pub async fn available_appointments(&self) -> Vec<Appointment> {
        let appointments = self.store.available_appointments().await;
        debug!("{} appointments available", appointments.len());
        appointments
    }

    /// Moves an available slot to booked for the requested patient. Booked slots
    /// are never released or reassigned.
    pub async fn book_appointment(
        &self,
        appointment_id: i64,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!("Booking appointment {} for patient {}", appointment_id, request.patient_id);

        match self.store.book_appointment(appointment_id, request.patient_id).await {
            Ok(appointment) => {
                info!("Appointment {} booked successfully", appointment.id);
                Ok(appointment)
            }
            Err(BookingError::AppointmentNotFound(id)) => {
                warn!("Booking rejected: appointment {} does not exist", id);
                Err(AppointmentError::NotFound)
            }
            Err(BookingError::AppointmentNotAvailable { id, status }) => {
                warn!("Booking rejected: appointment {} is {}", id, status);
                Err(AppointmentError::NotAvailable { status })
            }
        }
    }
}
