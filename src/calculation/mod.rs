//! Calculation logic for the government fee engine.
//!
//! One module per fee category, each returning its line item together with
//! the audit step explaining it, plus request validation and the
//! [`compute_fees`] entry point that ties them together.

mod engine;
mod fee_line;
mod labor_office;
mod medical_insurance;
mod other_fee;
mod residency;
mod social_insurance;
mod validation;

pub use engine::{compute_fees, compute_fees_with_schedule};
pub use fee_line::FeeLineResult;
pub use labor_office::calculate_labor_office;
pub use medical_insurance::calculate_medical_insurance;
pub use other_fee::{DEFAULT_OTHER_FEE_DESCRIPTION, calculate_other_fee};
pub use residency::calculate_residency;
pub use social_insurance::{calculate_social_insurance, social_insurance_rate};
pub use validation::validate_request;
