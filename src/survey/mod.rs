pub mod fields;
pub mod form;
pub mod risk;

pub use fields::{DietaryHabits, Gender, SleepDuration, YesNo};
pub use form::FormState;
pub use risk::{RiskDetails, risk_details};
