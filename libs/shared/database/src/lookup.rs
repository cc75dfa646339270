//! Pure lookups over the in-memory collections.

use shared_models::{Appointment, AppointmentStatus, InsurancePlan, Patient};

/// One past the highest issued id, or 1 for an empty collection.
/// `None` once the highest id is `i64::MAX`.
pub fn next_patient_id(patients: &[Patient]) -> Option<i64> {
    match patients.iter().map(|p| p.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// First plan matching `payer` and `plan` exactly.
pub fn find_insurance<'a>(
    insurances: &'a [InsurancePlan],
    payer: &str,
    plan: &str,
) -> Option<&'a InsurancePlan> {
    insurances.iter().find(|ins| ins.matches(payer, plan))
}

/// Appointments with `status`, in storage order.
pub fn appointments_with_status(
    appointments: &[Appointment],
    status: AppointmentStatus,
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| a.status == status)
        .cloned()
        .collect()
}

pub fn find_appointment_mut(appointments: &mut [Appointment], id: i64) -> Option<&mut Appointment> {
    appointments.iter_mut().find(|a| a.id == id)
}
