//! Employee model and related types.
//!
//! This module defines the Employee struct and ContractType enum
//! describing the attributes the fee engine reads from an employee record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employee's contract type, which decides which fees apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// A Saudi national.
    Saudi,
    /// A foreign (expatriate) worker.
    Foreign,
}

impl ContractType {
    /// Returns the serialized name of the contract type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Saudi => "saudi",
            ContractType::Foreign => "foreign",
        }
    }
}

/// Represents an employee whose government fees are being computed.
///
/// Only `contract_type`, `basic_salary` and `has_national_balance` influence
/// amounts; `id` and `name` are carried through for the calling application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier of the employee in the source system.
    #[serde(default)]
    pub id: String,
    /// Display name of the employee.
    #[serde(default)]
    pub name: String,
    /// The employee's contract type.
    pub contract_type: ContractType,
    /// The monthly basic salary in SAR.
    pub basic_salary: Decimal,
    /// Whether the employer holds national-balance status for this worker.
    /// Only meaningful for foreign workers.
    #[serde(default)]
    pub has_national_balance: bool,
}

impl Employee {
    /// Returns true if the employee is a Saudi national.
    ///
    /// # Examples
    ///
    /// ```
    /// use gov_fee_engine::models::{ContractType, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "EMP002".to_string(),
    ///     name: "Mohammed".to_string(),
    ///     contract_type: ContractType::Saudi,
    ///     basic_salary: Decimal::new(7500, 0),
    ///     has_national_balance: true,
    /// };
    /// assert!(employee.is_saudi());
    /// ```
    pub fn is_saudi(&self) -> bool {
        self.contract_type == ContractType::Saudi
    }
}
