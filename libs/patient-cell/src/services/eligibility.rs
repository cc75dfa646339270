use shared_models::InsurancePlan;

use crate::models::{EligibilityResponse, DEFAULT_INELIGIBLE_REASON, INSURANCE_NOT_FOUND_REASON};

/// Turns an insurance lookup result into the eligibility verdict returned by intake.
/// A missing or ineligible plan is a normal outcome, not an error.
pub fn determine_eligibility(plan: Option<&InsurancePlan>) -> EligibilityResponse {
    match plan {
        None => EligibilityResponse::ineligible(INSURANCE_NOT_FOUND_REASON),
        Some(plan) if plan.eligible => EligibilityResponse::eligible(plan.co_pay),
        Some(plan) => EligibilityResponse::ineligible(
            plan.reason.as_deref().unwrap_or(DEFAULT_INELIGIBLE_REASON),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(eligible: bool, co_pay: Option<i64>, reason: Option<&str>) -> InsurancePlan {
        InsurancePlan {
            payer: "Acme".to_string(),
            plan: "Gold".to_string(),
            eligible,
            co_pay,
            reason: reason.map(str::to_string),
        }
    }

    #[test]
    fn missing_plan_is_not_found() {
        assert_eq!(
            determine_eligibility(None),
            EligibilityResponse {
                eligible: false,
                copay: None,
                reason: Some("Insurance plan not found".to_string()),
            }
        );
    }

    #[test]
    fn eligible_plan_carries_copay() {
        let verdict = determine_eligibility(Some(&plan(true, Some(20), None)));
        assert!(verdict.eligible);
        assert_eq!(verdict.copay, Some(20));
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn eligible_plan_without_copay() {
        let verdict = determine_eligibility(Some(&plan(true, None, None)));
        assert!(verdict.eligible);
        assert_eq!(verdict.copay, None);
    }

    #[test]
    fn eligible_plan_ignores_reason() {
        let verdict = determine_eligibility(Some(&plan(true, Some(5), Some("stale note"))));
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn ineligible_plan_uses_its_reason() {
        let verdict = determine_eligibility(Some(&plan(false, Some(10), Some("Coverage lapsed"))));
        assert!(!verdict.eligible);
        assert_eq!(verdict.copay, None);
        assert_eq!(verdict.reason.as_deref(), Some("Coverage lapsed"));
    }

    #[test]
    fn ineligible_plan_defaults_reason() {
        let verdict = determine_eligibility(Some(&plan(false, None, None)));
        assert_eq!(verdict.reason.as_deref(), Some("Not eligible"));
    }
}
