//! Medical insurance premium calculation.
//!
//! Foreign workers are insured at one of three levels, each with a flat
//! annual premium that is pro-rated over the billing period. Coverage for
//! Saudi nationals may differ, so no amount is computed for them.

use crate::config::FeeSchedule;
use crate::error::EngineResult;
use crate::models::{AuditStep, BillingPeriod, Employee, FeeCategory, InsuranceLevel, LineItem};

use super::fee_line::{FeeLineResult, format_amount, prorate_annual};

const RULE_NAME: &str = "Medical Insurance";

/// Calculates the medical insurance premium for an employee over a billing
/// period.
///
/// # Examples
///
/// ```
/// use gov_fee_engine::calculation::calculate_medical_insurance;
/// use gov_fee_engine::config::FeeSchedule;
/// use gov_fee_engine::models::{BillingPeriod, ContractType, Employee, InsuranceLevel};
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
/// let result = calculate_medical_insurance(
///     &employee,
///     InsuranceLevel::High,
///     BillingPeriod::Monthly,
///     &FeeSchedule::standard(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.line_item.computed_amount, Decimal::from(125));
/// ```
pub fn calculate_medical_insurance(
    employee: &Employee,
    level: InsuranceLevel,
    period: BillingPeriod,
    schedule: &FeeSchedule,
    step_number: u32,
) -> EngineResult<FeeLineResult> {
    if employee.is_saudi() {
        return Ok(FeeLineResult::informational(
            FeeCategory::MedicalInsurance,
            RULE_NAME,
            "Medical insurance: may differ for Saudi employees".to_string(),
            serde_json::json!({
                "contract_type": employee.contract_type.as_str(),
                "insurance_level": level.as_str(),
                "period": period.as_str()
            }),
            step_number,
        ));
    }

    let annual_premium = schedule.annual_insurance_premium(level);
    let multiplier = period.multiplier();
    let amount = prorate_annual(annual_premium, multiplier, "period")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: FeeCategory::MedicalInsurance.as_str().to_string(),
        rule_name: RULE_NAME.to_string(),
        input: serde_json::json!({
            "contract_type": employee.contract_type.as_str(),
            "insurance_level": level.as_str(),
            "period": period.as_str(),
            "annual_premium": annual_premium.normalize().to_string()
        }),
        output: serde_json::json!({
            "applicable": true,
            "multiplier": multiplier.to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} ({}) / 12 x {} months = {}",
            annual_premium.normalize(),
            level.as_str(),
            multiplier,
            amount.normalize()
        ),
    };

    Ok(FeeLineResult {
        line_item: LineItem {
            category: FeeCategory::MedicalInsurance,
            computed_amount: amount,
            display_note: format!(
                "Medical insurance ({}): {}",
                level.as_str(),
                format_amount(amount)
            ),
            informational: false,
        },
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractType, round_currency};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(contract_type: ContractType) -> Employee {
        Employee {
            id: "EMP001".to_string(),
            name: "Ahmed Mohammed".to_string(),
            contract_type,
            basic_salary: Decimal::from(5000),
            has_national_balance: false,
        }
    }

    fn calculate(contract_type: ContractType, level: InsuranceLevel, period: BillingPeriod) -> FeeLineResult {
        calculate_medical_insurance(
            &create_test_employee(contract_type),
            level,
            period,
            &FeeSchedule::standard(),
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_foreign_annual_premiums_by_level() {
        let cases = [
            (InsuranceLevel::Basic, "400"),
            (InsuranceLevel::Medium, "900"),
            (InsuranceLevel::High, "1500"),
        ];
        for (level, expected) in cases {
            let result = calculate(ContractType::Foreign, level, BillingPeriod::Annual);
            assert_eq!(result.line_item.computed_amount, dec(expected), "level {:?}", level);
        }
    }

    #[test]
    fn test_foreign_basic_monthly() {
        let result = calculate(ContractType::Foreign, InsuranceLevel::Basic, BillingPeriod::Monthly);
        assert_eq!(round_currency(result.line_item.computed_amount), dec("33.33"));
        assert_eq!(
            result.line_item.display_note,
            "Medical insurance (basic): 33.33 SAR"
        );
    }

    #[test]
    fn test_foreign_medium_quarterly() {
        let result = calculate(ContractType::Foreign, InsuranceLevel::Medium, BillingPeriod::Quarterly);
        assert_eq!(result.line_item.computed_amount, dec("225"));
        assert_eq!(result.audit_step.input["insurance_level"], "medium");
    }

    #[test]
    fn test_saudi_is_informational_for_every_level() {
        for level in [InsuranceLevel::Basic, InsuranceLevel::Medium, InsuranceLevel::High] {
            let result = calculate(ContractType::Saudi, level, BillingPeriod::Annual);
            assert_eq!(result.line_item.computed_amount, Decimal::ZERO);
            assert!(result.line_item.informational);
            assert!(result.line_item.display_note.contains("may differ"));
        }
    }
}
