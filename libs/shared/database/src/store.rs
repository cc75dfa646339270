use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info};

use shared_models::{Appointment, AppointmentStatus, InsurancePlan, Patient};

use crate::error::{BookingError, StoreError};
use crate::lookup;

pub const PATIENTS_FILE: &str = "patients.json";
pub const APPOINTMENTS_FILE: &str = "appointments.json";
pub const INSURANCES_FILE: &str = "insurances.json";

/// The three collections as loaded from the seed files.
#[derive(Debug, Clone, Default)]
pub struct ClinicData {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub insurances: Vec<InsurancePlan>,
}

#[derive(Debug, Clone)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub patients: usize,
    pub appointments: usize,
    pub insurances: usize,
}

/// Process-lifetime clinic state. Nothing is ever written back to disk.
///
/// Every mutation runs under a single write lock, so id assignment and
/// check-then-book are atomic with respect to other requests.
pub struct ClinicStore {
    data: RwLock<ClinicData>,
}

impl ClinicStore {
    pub fn new(data: ClinicData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Reads `patients.json`, `appointments.json` and `insurances.json` from `data_dir`.
    pub async fn load(data_dir: &Path) -> Result<Self, StoreError> {
        debug!("Loading seed data from {}", data_dir.display());

        let data = ClinicData {
            patients: read_seed(&data_dir.join(PATIENTS_FILE)).await?,
            appointments: read_seed(&data_dir.join(APPOINTMENTS_FILE)).await?,
            insurances: read_seed(&data_dir.join(INSURANCES_FILE)).await?,
        };

        info!(
            "Seed data loaded: {} patients, {} appointments, {} insurance plans",
            data.patients.len(),
            data.appointments.len(),
            data.insurances.len()
        );

        Ok(Self::new(data))
    }

    pub async fn counts(&self) -> StoreCounts {
        let data = self.data.read().await;
        StoreCounts {
            patients: data.patients.len(),
            appointments: data.appointments.len(),
            insurances: data.insurances.len(),
        }
    }

    pub async fn patients(&self) -> Vec<Patient> {
        self.data.read().await.patients.clone()
    }

    /// Assigns the next id and appends the patient with empty phone and gender.
    /// Nothing is appended once the id space is exhausted.
    pub async fn create_patient(&self, new_patient: NewPatient) -> Result<Patient, StoreError> {
        let mut data = self.data.write().await;

        let id = lookup::next_patient_id(&data.patients)
            .ok_or(StoreError::PatientIdsExhausted(i64::MAX))?;

        let patient = Patient {
            id,
            first_name: new_patient.first_name,
            last_name: new_patient.last_name,
            dob: new_patient.dob,
            email: new_patient.email,
            phone: String::new(),
            gender: String::new(),
        };
        data.patients.push(patient.clone());

        debug!("Patient {} appended ({} total)", patient.id, data.patients.len());
        Ok(patient)
    }

    pub async fn find_insurance(&self, payer: &str, plan: &str) -> Option<InsurancePlan> {
        let data = self.data.read().await;
        lookup::find_insurance(&data.insurances, payer, plan).cloned()
    }

    pub async fn available_appointments(&self) -> Vec<Appointment> {
        let data = self.data.read().await;
        lookup::appointments_with_status(&data.appointments, AppointmentStatus::Available)
    }

    pub async fn appointment(&self, id: i64) -> Option<Appointment> {
        let data = self.data.read().await;
        data.appointments.iter().find(|a| a.id == id).cloned()
    }

    /// Books an available slot for `patient_id`. The patient id is not checked
    /// against the patient collection.
    pub async fn book_appointment(
        &self,
        appointment_id: i64,
        patient_id: i64,
    ) -> Result<Appointment, BookingError> {
        let mut data = self.data.write().await;

        let appointment = lookup::find_appointment_mut(&mut data.appointments, appointment_id)
            .ok_or(BookingError::AppointmentNotFound(appointment_id))?;

        if !appointment.is_available() {
            return Err(BookingError::AppointmentNotAvailable {
                id: appointment.id,
                status: appointment.status,
            });
        }

        appointment.book(patient_id);
        Ok(appointment.clone())
    }
}

async fn read_seed<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::SeedFormat {
        path: path.to_path_buf(),
        source,
    })
}
