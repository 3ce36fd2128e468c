//! Request types for the fee engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    BillingPeriod, ContractType, Employee, FeeCategory, FeeRequest, InsuranceLevel, OtherFee,
};

/// Request body for the `/calculate` endpoint.
///
/// Carries the employee, the billing period, the enabled categories and the
/// inputs those categories need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The billing period to project fees over.
    pub period: BillingPeriod,
    /// The enabled fee categories, in any order.
    pub categories: Vec<FeeCategory>,
    /// Required when medical insurance is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_level: Option<InsuranceLevel>,
    /// Required when the `other` category is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_fee: Option<OtherFeeRequest>,
    /// Issue date of the fee. Selects the fee schedule and starts the
    /// payment term; defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_date: Option<NaiveDate>,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Identifier of the employee in the source system.
    pub id: String,
    /// Display name of the employee.
    #[serde(default)]
    pub name: String,
    /// Saudi national or foreign worker.
    pub contract_type: ContractType,
    /// Monthly basic salary in SAR.
    pub basic_salary: Decimal,
    /// Whether the employer holds national-balance status for this worker.
    #[serde(default)]
    pub has_national_balance: bool,
}

/// A one-off charge in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherFeeRequest {
    /// The charge amount.
    pub amount: Decimal,
    /// What the charge is for.
    #[serde(default)]
    pub description: String,
}

impl CalculationRequest {
    /// Builds the engine's fee request from this API request.
    pub fn fee_request(&self) -> FeeRequest {
        FeeRequest {
            period: self.period,
            categories: self.categories.iter().copied().collect(),
            insurance_level: self.insurance_level,
            other_fee: self.other_fee.clone().map(Into::into),
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            contract_type: req.contract_type,
            basic_salary: req.basic_salary,
            has_national_balance: req.has_national_balance,
        }
    }
}

impl From<OtherFeeRequest> for OtherFee {
    fn from(req: OtherFeeRequest) -> Self {
        OtherFee {
            amount: req.amount,
            description: req.description,
        }
    }
}
