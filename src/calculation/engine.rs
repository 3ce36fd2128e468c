//! Fee calculation entry points.
//!
//! Validates the request, evaluates each enabled category in canonical
//! order and assembles the itemized [`FeeBreakdown`].

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, FeeBreakdown, FeeCategory, FeeRequest, LineItem, sum_line_items};

use super::fee_line::{AMOUNT_TOO_LARGE, FeeLineResult};
use super::labor_office::calculate_labor_office;
use super::medical_insurance::calculate_medical_insurance;
use super::other_fee::calculate_other_fee;
use super::residency::calculate_residency;
use super::social_insurance::calculate_social_insurance;
use super::validation::{require_insurance_level, require_other_fee, validate_request};

/// Computes the government fees for an employee using the built-in
/// standard schedule.
///
/// The function is pure: identical inputs always yield an identical
/// breakdown.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] if the request is incomplete or
/// inconsistent, or if an amount is too large to represent. No partial
/// breakdown is ever produced.
///
/// # Example
///
/// ```
/// use gov_fee_engine::calculation::compute_fees;
/// use gov_fee_engine::models::{BillingPeriod, ContractType, Employee, FeeCategory, FeeRequest};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP002".to_string(),
///     name: "Mohammed Abdullah".to_string(),
///     contract_type: ContractType::Saudi,
///     basic_salary: Decimal::from(10000),
///     has_national_balance: true,
/// };
/// let request = FeeRequest::new(BillingPeriod::Monthly, [FeeCategory::SocialInsurance]);
///
/// let breakdown = compute_fees(&employee, &request).unwrap();
/// assert_eq!(breakdown.total_amount, Decimal::from(2200));
/// assert_eq!(breakdown.line_items.len(), 1);
/// ```
pub fn compute_fees(employee: &Employee, request: &FeeRequest) -> EngineResult<FeeBreakdown> {
    compute_fees_with_schedule(employee, request, &FeeSchedule::standard())
}

/// Computes the government fees for an employee against a specific
/// fee schedule.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] if the request is incomplete or
/// inconsistent, or if an amount is too large to represent.
pub fn compute_fees_with_schedule(
    employee: &Employee,
    request: &FeeRequest,
    schedule: &FeeSchedule,
) -> EngineResult<FeeBreakdown> {
    validate_request(employee, request)?;

    let primary_category = request.primary_category().ok_or_else(|| {
        EngineError::validation("categories", "select at least one fee category")
    })?;

    let mut line_items = Vec::with_capacity(request.categories.len());
    let mut audit_trace = Vec::with_capacity(request.categories.len());

    for (index, category) in request.categories.iter().enumerate() {
        let step_number = index as u32 + 1;
        let result = calculate_category(*category, employee, request, schedule, step_number)?;
        line_items.push(result.line_item);
        audit_trace.push(result.audit_step);
    }

    let total_amount = checked_total(&line_items, request)?;

    Ok(FeeBreakdown {
        period: request.period,
        line_items,
        total_amount,
        primary_category,
        audit_trace,
    })
}

fn calculate_category(
    category: FeeCategory,
    employee: &Employee,
    request: &FeeRequest,
    schedule: &FeeSchedule,
    step_number: u32,
) -> EngineResult<FeeLineResult> {
    let period = request.period;
    match category {
        FeeCategory::LaborOffice => calculate_labor_office(employee, period, schedule, step_number),
        FeeCategory::Residency => calculate_residency(employee, period, schedule, step_number),
        FeeCategory::MedicalInsurance => {
            let level = require_insurance_level(request)?;
            calculate_medical_insurance(employee, level, period, schedule, step_number)
        }
        FeeCategory::SocialInsurance => {
            calculate_social_insurance(employee, period, schedule, step_number)
        }
        FeeCategory::Other => calculate_other_fee(require_other_fee(request)?, step_number),
    }
}

/// Sums line item amounts, blaming the other fee for an overflow when one is
/// present and the salary otherwise.
fn checked_total(line_items: &[LineItem], request: &FeeRequest) -> EngineResult<Decimal> {
    sum_line_items(line_items).ok_or_else(|| {
        let field = if request.includes(FeeCategory::Other) {
            "other_fee.amount"
        } else {
            "basic_salary"
        };
        EngineError::validation(field, AMOUNT_TOO_LARGE)
    })
}
