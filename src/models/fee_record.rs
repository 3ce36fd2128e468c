//! Fee records handed to the persistence layer.
//!
//! The engine itself never persists anything. A [`FeeRecord`] is what the
//! calling application stores after a calculation: the amount, the primary
//! fee type, the issue and due dates, and the payment status.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{FeeBreakdown, FeeCategory};

/// Default number of days between issuing a fee and its due date.
pub const DEFAULT_DUE_DAYS: u32 = 30;

/// Payment status of a stored fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Issued and awaiting payment.
    Pending,
    /// Paid in full.
    Paid,
    /// Past its due date without payment.
    Overdue,
}

/// A computed fee as stored by the calling application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    /// The employee the fee was computed for.
    pub employee_id: String,
    /// The primary fee category of the breakdown.
    pub fee_type: FeeCategory,
    /// The total amount at full precision.
    pub amount: Decimal,
    /// The date the fee was issued.
    pub fee_date: NaiveDate,
    /// The date payment is due.
    pub due_date: NaiveDate,
    /// The stored payment status.
    pub payment_status: PaymentStatus,
    /// When the fee was paid, if it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Free-form notes; defaults to the breakdown's display notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FeeRecord {
    /// Creates a pending record for a breakdown issued on `fee_date`, due
    /// `due_days` later.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use gov_fee_engine::calculation::compute_fees;
    /// use gov_fee_engine::models::{
    ///     BillingPeriod, ContractType, Employee, FeeCategory, FeeRecord, FeeRequest, PaymentStatus,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "EMP001".to_string(),
    ///     name: "Ahmed".to_string(),
    ///     contract_type: ContractType::Foreign,
    ///     basic_salary: Decimal::from(5000),
    ///     has_national_balance: false,
    /// };
    /// let request = FeeRequest::new(BillingPeriod::Monthly, [FeeCategory::LaborOffice]);
    /// let breakdown = compute_fees(&employee, &request).unwrap();
    ///
    /// let issued = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    /// let record = FeeRecord::issue(&employee.id, &breakdown, issued, 30).unwrap();
    /// assert_eq!(record.due_date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    /// assert_eq!(record.payment_status, PaymentStatus::Pending);
    /// ```
    pub fn issue(
        employee_id: impl Into<String>,
        breakdown: &FeeBreakdown,
        fee_date: NaiveDate,
        due_days: u32,
    ) -> EngineResult<Self> {
        let due_date = fee_date
            .checked_add_days(Days::new(u64::from(due_days)))
            .ok_or_else(|| {
                EngineError::validation(
                    "fee_date",
                    format!("due date {} days after {} is out of range", due_days, fee_date),
                )
            })?;

        Ok(Self {
            employee_id: employee_id.into(),
            fee_type: breakdown.primary_category,
            amount: breakdown.total_amount,
            fee_date,
            due_date,
            payment_status: PaymentStatus::Pending,
            payment_date: None,
            notes: Some(breakdown.display_notes().join("; ")),
        })
    }

    /// Records payment on `date`.
    pub fn mark_paid(&mut self, date: NaiveDate) {
        self.payment_status = PaymentStatus::Paid;
        self.payment_date = Some(date);
    }

    /// Returns the effective status on `date`: a pending fee whose due date
    /// has passed is overdue.
    pub fn status_on(&self, date: NaiveDate) -> PaymentStatus {
        match self.payment_status {
            PaymentStatus::Pending if self.due_date < date => PaymentStatus::Overdue,
            status => status,
        }
    }

    /// Returns true if the fee is unpaid and due on or before `date`.
    pub fn is_due(&self, date: NaiveDate) -> bool {
        self.payment_status != PaymentStatus::Paid && self.due_date <= date
    }
}
