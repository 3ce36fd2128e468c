//! One-off "other" fees.

use crate::error::EngineResult;
use crate::models::{AuditStep, FeeCategory, LineItem, OtherFee};

use super::fee_line::{FeeLineResult, format_amount};

/// Description used when the user left the other fee's description blank.
pub const DEFAULT_OTHER_FEE_DESCRIPTION: &str = "Other fees";

/// Adds a one-off charge verbatim. The period multiplier never applies.
///
/// The amount is expected to be validated as positive beforehand. Never
/// fails.
pub fn calculate_other_fee(other_fee: &OtherFee, step_number: u32) -> EngineResult<FeeLineResult> {
    let description = match other_fee.description.trim() {
        "" => DEFAULT_OTHER_FEE_DESCRIPTION,
        text => text,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: FeeCategory::Other.as_str().to_string(),
        rule_name: "Other Fee".to_string(),
        input: serde_json::json!({
            "amount": other_fee.amount.normalize().to_string(),
            "description": description
        }),
        output: serde_json::json!({
            "applicable": true,
            "amount": other_fee.amount.normalize().to_string()
        }),
        reasoning: format!(
            "One-off charge of {} added as entered",
            other_fee.amount.normalize()
        ),
    };

    Ok(FeeLineResult {
        line_item: LineItem {
            category: FeeCategory::Other,
            computed_amount: other_fee.amount,
            display_note: format!("{}: {}", description, format_amount(other_fee.amount)),
            informational: false,
        },
        audit_step,
    })
}
