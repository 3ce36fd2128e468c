//! Fee request models.
//!
//! A [`FeeRequest`] is the explicit input envelope for a fee calculation:
//! the billing period, the enabled fee categories, and the extra inputs some
//! categories need. It is constructed fresh for every calculation.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The billing period a calculation projects fees over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    /// One month.
    Monthly,
    /// Three months.
    Quarterly,
    /// Six months.
    Semiannual,
    /// Twelve months.
    Annual,
}

impl BillingPeriod {
    /// Returns the number of months covered by the period.
    pub fn months(&self) -> u32 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Quarterly => 3,
            BillingPeriod::Semiannual => 6,
            BillingPeriod::Annual => 12,
        }
    }

    /// Returns the multiplier applied to monthly rates.
    ///
    /// # Example
    ///
    /// ```
    /// use gov_fee_engine::models::BillingPeriod;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(BillingPeriod::Quarterly.multiplier(), Decimal::from(3));
    /// assert_eq!(BillingPeriod::Annual.multiplier(), Decimal::from(12));
    /// ```
    pub fn multiplier(&self) -> Decimal {
        Decimal::from(self.months())
    }

    /// Returns the serialized name of the period.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Quarterly => "quarterly",
            BillingPeriod::Semiannual => "semiannual",
            BillingPeriod::Annual => "annual",
        }
    }
}

/// A government fee category.
///
/// The declaration order is the canonical display and precedence order, so
/// `Ord` (and therefore iteration over a `BTreeSet<FeeCategory>`) follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeCategory {
    /// Labor office financial levy (expat levy).
    LaborOffice,
    /// Passports department residency (iqama) fee.
    Residency,
    /// Employer-provided medical insurance.
    MedicalInsurance,
    /// GOSI social insurance contributions.
    SocialInsurance,
    /// A one-off charge entered by the user.
    Other,
}

impl FeeCategory {
    /// All categories in canonical order.
    pub const ALL: [FeeCategory; 5] = [
        FeeCategory::LaborOffice,
        FeeCategory::Residency,
        FeeCategory::MedicalInsurance,
        FeeCategory::SocialInsurance,
        FeeCategory::Other,
    ];

    /// Returns the serialized name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeCategory::LaborOffice => "labor_office",
            FeeCategory::Residency => "residency",
            FeeCategory::MedicalInsurance => "medical_insurance",
            FeeCategory::SocialInsurance => "social_insurance",
            FeeCategory::Other => "other",
        }
    }

    /// Returns the label shown to users for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            FeeCategory::LaborOffice => "Labor office (financial levy)",
            FeeCategory::Residency => "Passports (residency)",
            FeeCategory::MedicalInsurance => "Medical insurance",
            FeeCategory::SocialInsurance => "Social insurance",
            FeeCategory::Other => "Other fees",
        }
    }

    /// Returns true if the period multiplier scales this category.
    pub fn scales_with_period(&self) -> bool {
        !matches!(self, FeeCategory::Other)
    }
}

/// Medical insurance coverage level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceLevel {
    /// Basic coverage.
    Basic,
    /// Medium coverage.
    Medium,
    /// High (premium) coverage.
    High,
}

impl InsuranceLevel {
    /// Returns the serialized name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceLevel::Basic => "basic",
            InsuranceLevel::Medium => "medium",
            InsuranceLevel::High => "high",
        }
    }
}

/// A one-off charge added verbatim to the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherFee {
    /// The charge amount; must be positive.
    pub amount: Decimal,
    /// What the charge is for.
    #[serde(default)]
    pub description: String,
}

/// The input envelope for a fee calculation.
///
/// # Example
///
/// ```
/// use gov_fee_engine::models::{BillingPeriod, FeeCategory, FeeRequest};
///
/// let request = FeeRequest::new(
///     BillingPeriod::Quarterly,
///     [FeeCategory::SocialInsurance, FeeCategory::LaborOffice],
/// );
/// let order: Vec<_> = request.categories.iter().copied().collect();
/// assert_eq!(order, vec![FeeCategory::LaborOffice, FeeCategory::SocialInsurance]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRequest {
    /// The billing period to project fees over.
    pub period: BillingPeriod,
    /// The enabled fee categories.
    pub categories: BTreeSet<FeeCategory>,
    /// Required when medical insurance is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_level: Option<InsuranceLevel>,
    /// Required when the `other` category is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_fee: Option<OtherFee>,
}

impl FeeRequest {
    /// Creates a request for the given period and categories with no
    /// insurance level or other fee.
    pub fn new(period: BillingPeriod, categories: impl IntoIterator<Item = FeeCategory>) -> Self {
        Self {
            period,
            categories: categories.into_iter().collect(),
            insurance_level: None,
            other_fee: None,
        }
    }

    /// Sets the medical insurance level.
    pub fn with_insurance_level(mut self, level: InsuranceLevel) -> Self {
        self.insurance_level = Some(level);
        self
    }

    /// Sets the one-off "other" charge.
    pub fn with_other_fee(mut self, amount: Decimal, description: impl Into<String>) -> Self {
        self.other_fee = Some(OtherFee {
            amount,
            description: description.into(),
        });
        self
    }

    /// Returns true if the category is enabled.
    pub fn includes(&self, category: FeeCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Returns the first enabled category in canonical order.
    pub fn primary_category(&self) -> Option<FeeCategory> {
        self.categories.iter().next().copied()
    }
}
