use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ==============================================================================
// PATIENTS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth exactly as submitted; no format is enforced.
    pub dob: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: String,
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Available,
    Booked,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Available => write!(f, "available"),
            AppointmentStatus::Booked => write!(f, "booked"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub status: AppointmentStatus,
    /// Outer `None` means the key was absent from the seed record; `Some(None)`
    /// is an explicit `null`. Both are written back exactly as read.
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub patient_id: Option<Option<i64>>,
    /// Any other seeded slot fields (time, provider, ...) carried through untouched.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Appointment {
    pub fn booked_patient_id(&self) -> Option<i64> {
        self.patient_id.flatten()
    }

    pub fn is_available(&self) -> bool {
        self.status == AppointmentStatus::Available
    }

    /// Marks the slot as taken by `patient_id`. Callers check availability first.
    pub fn book(&mut self, patient_id: i64) {
        self.status = AppointmentStatus::Booked;
        self.patient_id = Some(Some(patient_id));
    }
}

fn present_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ==============================================================================
// INSURANCE
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurancePlan {
    pub payer: String,
    pub plan: String,
    #[serde(default)]
    pub eligible: bool,
    #[serde(rename = "coPay", default, skip_serializing_if = "Option::is_none")]
    pub co_pay: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl InsurancePlan {
    pub fn matches(&self, payer: &str, plan: &str) -> bool {
        self.payer == payer && self.plan == plan
    }
}
