use serde::{Deserialize, Serialize};

pub const INSURANCE_NOT_FOUND_REASON: &str = "Insurance plan not found";
pub const DEFAULT_INELIGIBLE_REASON: &str = "Not eligible";

/// Intake form. Every field is a required string; no format checks are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRequest {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub insurance_payer: String,
    pub insurance_plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EligibilityResponse {
    pub eligible: bool,
    pub copay: Option<i64>,
    pub reason: Option<String>,
}

impl EligibilityResponse {
    pub fn eligible(copay: Option<i64>) -> Self {
        Self {
            eligible: true,
            copay,
            reason: None,
        }
    }

    pub fn ineligible(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            copay: None,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeResponse {
    pub patient_id: i64,
    pub eligibility: EligibilityResponse,
}
