//! Social insurance (GOSI) contribution calculation functionality.
//!
//! Contributions are a percentage of basic salary: 22% for Saudi nationals
//! (12% employer plus 10% employee, combined here) and 2% for foreign
//! workers, in the standard schedule.

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::error::EngineResult;
use crate::models::{AuditStep, BillingPeriod, ContractType, Employee, FeeCategory, LineItem};

use super::fee_line::{FeeLineResult, checked_product, format_amount, format_percent};

/// Returns the combined contribution rate for a contract type.
pub fn social_insurance_rate(contract_type: ContractType, schedule: &FeeSchedule) -> Decimal {
    match contract_type {
        ContractType::Saudi => schedule.saudi_social_insurance_rate(),
        ContractType::Foreign => schedule.social_insurance.foreign,
    }
}

/// Calculates social insurance contributions over a billing period.
///
/// Unlike the other government fees this one applies to every employee;
/// only the rate differs by contract type.
///
/// # Errors
///
/// Returns [`EngineError::Validation`](crate::error::EngineError::Validation)
/// on field `basic_salary` if the salary is too large to project over the
/// period.
///
/// # Examples
///
/// ```
/// use gov_fee_engine::calculation::calculate_social_insurance;
/// use gov_fee_engine::config::FeeSchedule;
/// use gov_fee_engine::models::{BillingPeriod, ContractType, Employee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP002".to_string(),
///     name: "Mohammed".to_string(),
///     contract_type: ContractType::Saudi,
///     basic_salary: Decimal::from(10000),
///     has_national_balance: true,
/// };
///
/// let result = calculate_social_insurance(&employee, BillingPeriod::Monthly, &FeeSchedule::standard(), 1).unwrap();
/// assert_eq!(result.line_item.computed_amount, Decimal::from(2200));
/// ```
pub fn calculate_social_insurance(
    employee: &Employee,
    period: BillingPeriod,
    schedule: &FeeSchedule,
    step_number: u32,
) -> EngineResult<FeeLineResult> {
    let rate = social_insurance_rate(employee.contract_type, schedule);
    let multiplier = period.multiplier();
    let monthly_contribution = checked_product(employee.basic_salary, rate, "basic_salary")?;
    let amount = checked_product(monthly_contribution, multiplier, "basic_salary")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: FeeCategory::SocialInsurance.as_str().to_string(),
        rule_name: "Social Insurance".to_string(),
        input: serde_json::json!({
            "contract_type": employee.contract_type.as_str(),
            "basic_salary": employee.basic_salary.normalize().to_string(),
            "period": period.as_str(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "applicable": true,
            "monthly_contribution": monthly_contribution.normalize().to_string(),
            "multiplier": multiplier.to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} x {} months = {}",
            employee.basic_salary.normalize(),
            format_percent(rate),
            multiplier,
            amount.normalize()
        ),
    };

    Ok(FeeLineResult {
        line_item: LineItem {
            category: FeeCategory::SocialInsurance,
            computed_amount: amount,
            display_note: format!(
                "Social insurance: {} ({} of basic salary)",
                format_amount(amount),
                format_percent(rate)
            ),
            informational: false,
        },
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(contract_type: ContractType, salary: &str) -> Employee {
        Employee {
            id: "EMP001".to_string(),
            name: "Test Employee".to_string(),
            contract_type,
            basic_salary: dec(salary),
            has_national_balance: false,
        }
    }

    fn calculate(employee: &Employee, period: BillingPeriod) -> FeeLineResult {
        calculate_social_insurance(employee, period, &FeeSchedule::standard(), 1).unwrap()
    }

    #[test]
    fn test_saudi_monthly_10000() {
        let employee = create_test_employee(ContractType::Saudi, "10000");
        let result = calculate(&employee, BillingPeriod::Monthly);

        assert_eq!(result.line_item.computed_amount, dec("2200.00"));
        assert_eq!(
            result.line_item.display_note,
            "Social insurance: 2200.00 SAR (22% of basic salary)"
        );
        assert!(!result.line_item.informational);
    }

    #[test]
    fn test_foreign_monthly_5000() {
        let employee = create_test_employee(ContractType::Foreign, "5000");
        let result = calculate(&employee, BillingPeriod::Monthly);

        assert_eq!(result.line_item.computed_amount, dec("100.00"));
        assert!(result.line_item.display_note.contains("2% of basic salary"));
    }

    #[test]
    fn test_period_multiplier_applies() {
        let employee = create_test_employee(ContractType::Saudi, "7500");
        assert_eq!(
            calculate(&employee, BillingPeriod::Semiannual).line_item.computed_amount,
            dec("9900")
        );
        assert_eq!(
            calculate(&employee, BillingPeriod::Annual).line_item.computed_amount,
            dec("19800")
        );
    }

    #[test]
    fn test_fractional_salary_keeps_precision() {
        let employee = create_test_employee(ContractType::Foreign, "4321.55");
        let result = calculate(&employee, BillingPeriod::Quarterly);
        assert_eq!(result.line_item.computed_amount, dec("259.2930"));
    }

    #[test]
    fn test_zero_salary_gives_zero_contribution() {
        let employee = create_test_employee(ContractType::Saudi, "0");
        let result = calculate(&employee, BillingPeriod::Annual);
        assert_eq!(result.line_item.computed_amount, Decimal::ZERO);
        assert!(!result.line_item.informational);
    }

    #[test]
    fn test_maximum_salary_over_a_year_is_rejected() {
        let mut employee = create_test_employee(ContractType::Saudi, "0");
        employee.basic_salary = Decimal::MAX;

        let error = calculate_social_insurance(
            &employee,
            BillingPeriod::Annual,
            &FeeSchedule::standard(),
            1,
        )
        .unwrap_err();
        assert_eq!(error.field(), Some("basic_salary"));
    }

    #[test]
    fn test_maximum_salary_for_one_month_still_computes() {
        let mut employee = create_test_employee(ContractType::Foreign, "0");
        employee.basic_salary = Decimal::MAX;

        let result = calculate(&employee, BillingPeriod::Monthly);
        assert!(result.line_item.computed_amount > Decimal::ZERO);
    }

    #[test]
    fn test_rate_by_contract_type() {
        let schedule = FeeSchedule::standard();
        assert_eq!(social_insurance_rate(ContractType::Saudi, &schedule), dec("0.22"));
        assert_eq!(social_insurance_rate(ContractType::Foreign, &schedule), dec("0.02"));
    }
}
