//! Shared result type for the per-category fee calculators.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, FeeCategory, LineItem, round_currency};

/// Message attached to validation errors raised when an amount overflows.
pub(crate) const AMOUNT_TOO_LARGE: &str = "amount too large";

/// The outcome of evaluating one fee category: its line item and the audit
/// step recording how it was derived.
#[derive(Debug, Clone)]
pub struct FeeLineResult {
    /// The line item contributed to the breakdown.
    pub line_item: LineItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl FeeLineResult {
    /// Builds a zero-amount informational result for a category that does
    /// not apply to the employee.
    pub(crate) fn informational(
        category: FeeCategory,
        rule_name: &str,
        note: String,
        input: serde_json::Value,
        step_number: u32,
    ) -> Self {
        let audit_step = AuditStep {
            step_number,
            rule_id: category.as_str().to_string(),
            rule_name: rule_name.to_string(),
            input,
            output: serde_json::json!({
                "applicable": false,
                "amount": "0"
            }),
            reasoning: note.clone(),
        };

        Self {
            line_item: LineItem {
                category,
                computed_amount: Decimal::ZERO,
                display_note: note,
                informational: true,
            },
            audit_step,
        }
    }
}

/// Formats an amount for a display note: rounded to two places, with SAR suffix.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("{:.2} SAR", round_currency(amount))
}

/// Formats a fractional rate as a percentage, e.g. `0.22` as `22%`.
pub(crate) fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Multiplies two amounts, reporting overflow as a validation error on `field`.
pub(crate) fn checked_product(lhs: Decimal, rhs: Decimal, field: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::validation(field, AMOUNT_TOO_LARGE))
}

/// Pro-rates an annual fee over `months`.
///
/// Multiplies before dividing, so whole-year projections stay exact while
/// partial years keep full decimal precision.
pub(crate) fn prorate_annual(annual: Decimal, months: Decimal, field: &str) -> EngineResult<Decimal> {
    checked_product(annual, months, field)?
        .checked_div(Decimal::from(12))
        .ok_or_else(|| EngineError::validation(field, AMOUNT_TOO_LARGE))
}
