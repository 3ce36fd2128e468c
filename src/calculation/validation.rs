//! Request validation.
//!
//! Every precondition of a fee calculation is checked here before any amount
//! is computed. A violation aborts the whole calculation with
//! [`EngineError::Validation`] naming the offending field; nothing is ever
//! defaulted to zero.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, FeeCategory, FeeRequest, InsuranceLevel, OtherFee};

/// Validates an employee and fee request pair.
///
/// # Errors
///
/// | Condition | Field |
/// |---|---|
/// | no category enabled | `categories` |
/// | medical insurance enabled without a level | `insurance_level` |
/// | `other` enabled without a fee | `other_fee` |
/// | `other` fee amount not positive | `other_fee.amount` |
/// | negative basic salary | `basic_salary` |
///
/// # Example
///
/// ```
/// use gov_fee_engine::calculation::validate_request;
/// use gov_fee_engine::models::{BillingPeriod, ContractType, Employee, FeeRequest};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: String::new(),
///     name: String::new(),
///     contract_type: ContractType::Foreign,
///     basic_salary: Decimal::from(4500),
///     has_national_balance: false,
/// };
/// let request = FeeRequest::new(BillingPeriod::Monthly, []);
///
/// let error = validate_request(&employee, &request).unwrap_err();
/// assert_eq!(error.field(), Some("categories"));
/// ```
pub fn validate_request(employee: &Employee, request: &FeeRequest) -> EngineResult<()> {
    if request.categories.is_empty() {
        return Err(EngineError::validation(
            "categories",
            "select at least one fee category",
        ));
    }

    if request.includes(FeeCategory::MedicalInsurance) {
        require_insurance_level(request)?;
    }

    if request.includes(FeeCategory::Other) {
        require_other_fee(request)?;
    }

    if employee.basic_salary < Decimal::ZERO {
        return Err(EngineError::validation(
            "basic_salary",
            format!("must not be negative, got {}", employee.basic_salary),
        ));
    }

    Ok(())
}

/// Returns the insurance level, failing if it is missing.
pub(crate) fn require_insurance_level(request: &FeeRequest) -> EngineResult<InsuranceLevel> {
    request.insurance_level.ok_or_else(|| {
        EngineError::validation(
            "insurance_level",
            "an insurance level is required when medical insurance is selected",
        )
    })
}

/// Returns the other fee, failing if it is missing or its amount is not positive.
pub(crate) fn require_other_fee(request: &FeeRequest) -> EngineResult<&OtherFee> {
    let other_fee = request.other_fee.as_ref().ok_or_else(|| {
        EngineError::validation(
            "other_fee",
            "an amount is required when other fees are selected",
        )
    })?;

    if other_fee.amount <= Decimal::ZERO {
        return Err(EngineError::validation(
            "other_fee.amount",
            format!("must be positive, got {}", other_fee.amount),
        ));
    }

    Ok(other_fee)
}
