//! Core data models for the Government Fee Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod fee_breakdown;
mod fee_record;
mod fee_request;

pub use employee::{ContractType, Employee};
pub use fee_breakdown::{
    AuditStep, CURRENCY_DECIMAL_PLACES, FeeBreakdown, LineItem, MULTIPLE_FEES_LABEL,
    round_currency, sum_line_items,
};
pub use fee_record::{DEFAULT_DUE_DAYS, FeeRecord, PaymentStatus};
pub use fee_request::{BillingPeriod, FeeCategory, FeeRequest, InsuranceLevel, OtherFee};
