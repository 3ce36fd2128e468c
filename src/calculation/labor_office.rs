//! Labor office levy calculation functionality.
//!
//! The labor office charges a monthly financial levy for every foreign
//! worker. The rate depends on whether the employer holds national-balance
//! status. Saudi nationals are exempt.

use crate::config::FeeSchedule;
use crate::error::EngineResult;
use crate::models::{AuditStep, BillingPeriod, Employee, FeeCategory, LineItem};

use super::fee_line::{FeeLineResult, checked_product, format_amount};

const RULE_NAME: &str = "Labor Office Levy";

/// Calculates the labor office levy for an employee over a billing period.
///
/// Foreign workers pay the schedule's monthly levy (700 with national
/// balance, 800 without, in the standard schedule) times the period
/// multiplier. Saudi nationals get a zero-amount informational line item.
///
/// # Errors
///
/// Returns [`EngineError::Validation`](crate::error::EngineError::Validation)
/// on field `period` if the projected levy overflows.
///
/// # Examples
///
/// ```
/// use gov_fee_engine::calculation::calculate_labor_office;
/// use gov_fee_engine::config::FeeSchedule;
/// use gov_fee_engine::models::{BillingPeriod, ContractType, Employee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP003".to_string(),
///     name: "Rajesh Kumar".to_string(),
///     contract_type: ContractType::Foreign,
///     basic_salary: Decimal::from(4500),
///     has_national_balance: false,
/// };
///
/// let result = calculate_labor_office(&employee, BillingPeriod::Annual, &FeeSchedule::standard(), 1).unwrap();
/// assert_eq!(result.line_item.computed_amount, Decimal::from(9600));
/// ```
pub fn calculate_labor_office(
    employee: &Employee,
    period: BillingPeriod,
    schedule: &FeeSchedule,
    step_number: u32,
) -> EngineResult<FeeLineResult> {
    if employee.is_saudi() {
        return Ok(FeeLineResult::informational(
            FeeCategory::LaborOffice,
            RULE_NAME,
            "Labor office: not applicable to Saudi employees".to_string(),
            serde_json::json!({
                "contract_type": employee.contract_type.as_str(),
                "period": period.as_str()
            }),
            step_number,
        ));
    }

    let (monthly_fee, balance_text) = if employee.has_national_balance {
        (
            schedule.labor_office.monthly_with_national_balance,
            "with national balance",
        )
    } else {
        (
            schedule.labor_office.monthly_without_national_balance,
            "without national balance",
        )
    };

    let multiplier = period.multiplier();
    let amount = checked_product(monthly_fee, multiplier, "period")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: FeeCategory::LaborOffice.as_str().to_string(),
        rule_name: RULE_NAME.to_string(),
        input: serde_json::json!({
            "contract_type": employee.contract_type.as_str(),
            "has_national_balance": employee.has_national_balance,
            "period": period.as_str(),
            "monthly_fee": monthly_fee.normalize().to_string()
        }),
        output: serde_json::json!({
            "applicable": true,
            "multiplier": multiplier.to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} months = {} ({})",
            monthly_fee.normalize(),
            multiplier,
            amount.normalize(),
            balance_text
        ),
    };

    Ok(FeeLineResult {
        line_item: LineItem {
            category: FeeCategory::LaborOffice,
            computed_amount: amount,
            display_note: format!("Labor office: {} ({})", format_amount(amount), balance_text),
            informational: false,
        },
        audit_step,
    })
}
