use std::path::PathBuf;
use thiserror::Error;

use shared_models::AppointmentStatus;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}: {source}")]
    SeedFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Patient id space exhausted: highest id is {0}")]
    PatientIdsExhausted(i64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Appointment {0} not found")]
    AppointmentNotFound(i64),

    #[error("Appointment {id} is {status}, not available")]
    AppointmentNotAvailable { id: i64, status: AppointmentStatus },
}
