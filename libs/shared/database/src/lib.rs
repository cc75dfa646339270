pub mod error;
pub mod lookup;
pub mod store;

pub use error::{BookingError, StoreError};
pub use store::{ClinicData, ClinicStore, NewPatient, StoreCounts};
