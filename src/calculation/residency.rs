//! Residency (iqama) fee calculation.

use crate::config::FeeSchedule;
use crate::error::EngineResult;
use crate::models::{AuditStep, BillingPeriod, Employee, FeeCategory, LineItem};

use super::fee_line::{FeeLineResult, format_amount, prorate_annual};

const RULE_NAME: &str = "Residency Fee";

/// Calculates the residency fee for an employee over a billing period.
///
/// The flat annual fee is pro-rated to a monthly rate and scaled by the
/// period multiplier. Saudi nationals get a zero-amount informational line
/// item.
///
/// # Examples
///
/// ```
/// use gov_fee_engine::calculation::calculate_residency;
/// use gov_fee_engine::config::FeeSchedule;
/// use gov_fee_engine::models::{BillingPeriod, ContractType, Employee, round_currency};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP001".to_string(),
///     name: "Ahmed".to_string(),
///     contract_type: ContractType::Foreign,
///     basic_salary: Decimal::from(5000),
///     has_national_balance: false,
/// };
///
/// let result = calculate_residency(&employee, BillingPeriod::Monthly, &FeeSchedule::standard(), 1).unwrap();
/// assert_eq!(round_currency(result.line_item.computed_amount), Decimal::new(5417, 2));
/// ```
pub fn calculate_residency(
    employee: &Employee,
    period: BillingPeriod,
    schedule: &FeeSchedule,
    step_number: u32,
) -> EngineResult<FeeLineResult> {
    if employee.is_saudi() {
        return Ok(FeeLineResult::informational(
            FeeCategory::Residency,
            RULE_NAME,
            "Passports (residency): not applicable to Saudi employees".to_string(),
            serde_json::json!({
                "contract_type": employee.contract_type.as_str(),
                "period": period.as_str()
            }),
            step_number,
        ));
    }

    let annual_fee = schedule.residency.annual;
    let multiplier = period.multiplier();
    let amount = prorate_annual(annual_fee, multiplier, "period")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: FeeCategory::Residency.as_str().to_string(),
        rule_name: RULE_NAME.to_string(),
        input: serde_json::json!({
            "contract_type": employee.contract_type.as_str(),
            "period": period.as_str(),
            "annual_fee": annual_fee.normalize().to_string()
        }),
        output: serde_json::json!({
            "applicable": true,
            "multiplier": multiplier.to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} / 12 x {} months = {}",
            annual_fee.normalize(),
            multiplier,
            amount.normalize()
        ),
    };

    Ok(FeeLineResult {
        line_item: LineItem {
            category: FeeCategory::Residency,
            computed_amount: amount,
            display_note: format!("Passports (residency): {}", format_amount(amount)),
            informational: false,
        },
        audit_step,
    })
}
