use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{ClinicStore, NewPatient, StoreError};

use crate::models::{IntakeRequest, IntakeResponse};
use crate::services::eligibility::determine_eligibility;

pub struct IntakeService {
    store: Arc<ClinicStore>,
}

impl IntakeService {
    pub fn new(store: &Arc<ClinicStore>) -> Self {
        Self {
            store: store.clone(),
        }
    }

    /// Registers the patient, then checks their insurance. The patient record is
    /// kept whatever the eligibility outcome. Fails only when no patient id is left.
    pub async fn intake_patient(&self, request: IntakeRequest) -> Result<IntakeResponse, StoreError> {
        debug!("Registering patient intake for: {}", request.email);

        let patient = self
            .store
            .create_patient(NewPatient {
                first_name: request.first_name,
                last_name: request.last_name,
                dob: request.dob,
                email: request.email,
            })
            .await?;

        let plan = self
            .store
            .find_insurance(&request.insurance_payer, &request.insurance_plan)
            .await;
        let eligibility = determine_eligibility(plan.as_ref());

        info!(
            "Patient {} registered; {}/{} eligible: {}",
            patient.id, request.insurance_payer, request.insurance_plan, eligibility.eligible
        );

        Ok(IntakeResponse {
            patient_id: patient.id,
            eligibility,
        })
    }
}
