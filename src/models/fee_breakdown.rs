//! Fee breakdown models for the Government Fee Engine.
//!
//! This module contains the [`FeeBreakdown`] type and its associated structures
//! that capture all outputs from a fee calculation: itemized line items, the
//! total, the primary category used for labeling, and an audit trace.
//!
//! Amounts are stored at full decimal precision. Two-decimal rounding is a
//! display concern and only happens in [`round_currency`] and the
//! `display_*` helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{BillingPeriod, FeeCategory};

/// Number of decimal places used when displaying currency.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Label shown when more than one fee category is itemized.
pub const MULTIPLE_FEES_LABEL: &str = "Multiple fees";

/// Rounds an amount to two decimal places, midpoint away from zero. The
/// result always carries exactly two places, so `800` becomes `800.00`.
///
/// # Example
///
/// ```
/// use gov_fee_engine::models::round_currency;
/// use rust_decimal::Decimal;
///
/// let monthly_residency = Decimal::from(650) / Decimal::from(12);
/// assert_eq!(round_currency(monthly_residency), Decimal::new(5417, 2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// A single itemized fee.
///
/// # Example
///
/// ```
/// use gov_fee_engine::models::{FeeCategory, LineItem};
/// use rust_decimal::Decimal;
///
/// let item = LineItem {
///     category: FeeCategory::LaborOffice,
///     computed_amount: Decimal::from(9600),
///     display_note: "Labor office: 800 x 12 months (without national balance)".to_string(),
///     informational: false,
/// };
/// assert_eq!(item.display_amount(), Decimal::new(960000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The fee category this line item belongs to.
    pub category: FeeCategory,
    /// The computed amount at full precision.
    pub computed_amount: Decimal,
    /// A human-readable note describing how the amount was derived.
    pub display_note: String,
    /// True when the category does not apply and the item only carries a note.
    pub informational: bool,
}

impl LineItem {
    /// Returns the amount rounded for display.
    pub fn display_amount(&self) -> Decimal {
        round_currency(self.computed_amount)
    }
}

/// Sums line item amounts at full precision, or `None` on overflow.
pub fn sum_line_items(line_items: &[LineItem]) -> Option<Decimal> {
    line_items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.computed_amount))
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete, itemized result of a fee calculation.
///
/// `total_amount` always equals the exact sum of the line items'
/// `computed_amount`. A breakdown is never partially built: either every
/// enabled category produced a line item, or the calculation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// The billing period the amounts cover.
    pub period: BillingPeriod,
    /// One line item per enabled category, in canonical order.
    pub line_items: Vec<LineItem>,
    /// Sum of all line item amounts, at full precision.
    pub total_amount: Decimal,
    /// The first enabled category in canonical order.
    pub primary_category: FeeCategory,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: Vec<AuditStep>,
}

impl FeeBreakdown {
    /// Returns the sum of the line item amounts, or `None` if it overflows.
    pub fn line_items_total(&self) -> Option<Decimal> {
        sum_line_items(&self.line_items)
    }

    /// Returns the total rounded for display.
    pub fn display_total(&self) -> Decimal {
        round_currency(self.total_amount)
    }

    /// Returns true if more than one category was itemized.
    pub fn has_multiple_categories(&self) -> bool {
        self.line_items.len() > 1
    }

    /// Returns the label a consumer shows for the breakdown: the primary
    /// category's name, or a generic label when several categories apply.
    pub fn display_label(&self) -> &'static str {
        if self.has_multiple_categories() {
            MULTIPLE_FEES_LABEL
        } else {
            self.primary_category.display_name()
        }
    }

    /// Returns the line item for a category, if it was enabled.
    pub fn line_item(&self, category: FeeCategory) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.category == category)
    }

    /// Returns the display notes of all line items, in order.
    pub fn display_notes(&self) -> Vec<&str> {
        self.line_items
            .iter()
            .map(|item| item.display_note.as_str())
            .collect()
    }
}
