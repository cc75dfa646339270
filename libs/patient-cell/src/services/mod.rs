pub mod eligibility;
pub mod intake;

pub use eligibility::determine_eligibility;
pub use intake::IntakeService;
