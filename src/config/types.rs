//! Configuration types for fee schedules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML fee schedule files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DEFAULT_DUE_DAYS, InsuranceLevel};

/// Metadata about the authority publishing the fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityMetadata {
    /// Short code for the schedule (e.g., "KSA").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version of the schedule.
    pub version: String,
    /// URL to the official fee documentation.
    #[serde(default)]
    pub source_url: String,
}

/// Labor office financial levy, per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborOfficeRates {
    /// Monthly levy when the employer holds national-balance status.
    pub monthly_with_national_balance: Decimal,
    /// Monthly levy otherwise.
    pub monthly_without_national_balance: Decimal,
}

/// Residency (iqama) fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidencyRates {
    /// Flat annual fee.
    pub annual: Decimal,
}

/// Annual medical insurance premiums by level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalInsuranceRates {
    /// Annual premium for basic coverage.
    pub basic_annual: Decimal,
    /// Annual premium for medium coverage.
    pub medium_annual: Decimal,
    /// Annual premium for high coverage.
    pub high_annual: Decimal,
}

/// Social insurance contribution rates as fractions of basic salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsuranceRates {
    /// Employer share for Saudi nationals.
    pub saudi_employer: Decimal,
    /// Employee share for Saudi nationals.
    pub saudi_employee: Decimal,
    /// Combined rate for foreign workers.
    pub foreign: Decimal,
}

/// Payment terms applied to issued fee records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    /// Days between issue date and due date.
    pub due_days: u32,
}

impl Default for PaymentTerms {
    fn default() -> Self {
        Self {
            due_days: DEFAULT_DUE_DAYS,
        }
    }
}

/// The fee rates effective from a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// Labor office levy.
    pub labor_office: LaborOfficeRates,
    /// Residency fee.
    pub residency: ResidencyRates,
    /// Medical insurance premiums.
    pub medical_insurance: MedicalInsuranceRates,
    /// Social insurance rates.
    pub social_insurance: SocialInsuranceRates,
    /// Payment terms for issued records.
    #[serde(default)]
    pub payment_terms: PaymentTerms,
}

impl FeeSchedule {
    /// Returns the built-in standard schedule.
    ///
    /// | Fee | Rate |
    /// |---|---|
    /// | Labor office | 700 / month with national balance, 800 otherwise |
    /// | Residency | 650 / year |
    /// | Medical insurance | 400 / 900 / 1500 per year |
    /// | Social insurance | 12% + 10% for Saudis, 2% for foreign workers |
    ///
    /// It has no start date and applies to every calculation date.
    pub fn standard() -> Self {
        Self {
            effective_date: NaiveDate::MIN,
            labor_office: LaborOfficeRates {
                monthly_with_national_balance: Decimal::from(700),
                monthly_without_national_balance: Decimal::from(800),
            },
            residency: ResidencyRates {
                annual: Decimal::from(650),
            },
            medical_insurance: MedicalInsuranceRates {
                basic_annual: Decimal::from(400),
                medium_annual: Decimal::from(900),
                high_annual: Decimal::from(1500),
            },
            social_insurance: SocialInsuranceRates {
                saudi_employer: Decimal::new(12, 2),
                saudi_employee: Decimal::new(10, 2),
                foreign: Decimal::new(2, 2),
            },
            payment_terms: PaymentTerms::default(),
        }
    }

    /// Returns the annual medical insurance premium for a level.
    pub fn annual_insurance_premium(&self, level: InsuranceLevel) -> Decimal {
        match level {
            InsuranceLevel::Basic => self.medical_insurance.basic_annual,
            InsuranceLevel::Medium => self.medical_insurance.medium_annual,
            InsuranceLevel::High => self.medical_insurance.high_annual,
        }
    }

    /// Returns the combined (employer + employee) social insurance rate for Saudis.
    pub fn saudi_social_insurance_rate(&self) -> Decimal {
        self.social_insurance.saudi_employer + self.social_insurance.saudi_employee
    }

    /// Checks that the rates can be charged.
    ///
    /// Every amount must be non-negative, and social insurance rates
    /// (including the combined Saudi rate) must lie between 0 and 1.
    ///
    /// # Errors
    ///
    /// Returns a description of the first offending rate.
    pub fn validate(&self) -> Result<(), String> {
        let amounts = [
            ("labor_office.monthly_with_national_balance", self.labor_office.monthly_with_national_balance),
            ("labor_office.monthly_without_national_balance", self.labor_office.monthly_without_national_balance),
            ("residency.annual", self.residency.annual),
            ("medical_insurance.basic_annual", self.medical_insurance.basic_annual),
            ("medical_insurance.medium_annual", self.medical_insurance.medium_annual),
            ("medical_insurance.high_annual", self.medical_insurance.high_annual),
        ];
        let rates = [
            ("social_insurance.saudi_employer", self.social_insurance.saudi_employer),
            ("social_insurance.saudi_employee", self.social_insurance.saudi_employee),
            ("social_insurance.foreign", self.social_insurance.foreign),
        ];

        for (name, value) in amounts.iter().chain(&rates) {
            if *value < Decimal::ZERO {
                return Err(format!("{} must not be negative, got {}", name, value));
            }
        }

        for (name, value) in &rates {
            if *value > Decimal::ONE {
                return Err(format!("{} must be a fraction of at most 1, got {}", name, value));
            }
        }

        let saudi_rate = self.saudi_social_insurance_rate();
        if saudi_rate > Decimal::ONE {
            return Err(format!(
                "combined Saudi social insurance rate must be at most 1, got {}",
                saudi_rate
            ));
        }

        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// The complete fee configuration loaded from YAML files.
///
/// This struct aggregates the authority metadata and every effective-dated
/// schedule found in a configuration directory.
#[derive(Debug, Clone)]
pub struct FeeConfig {
    /// Authority metadata.
    metadata: AuthorityMetadata,
    /// Schedules by effective date (sorted oldest first).
    schedules: Vec<FeeSchedule>,
}

impl FeeConfig {
    /// Creates a new FeeConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if two schedules share an
    /// effective date.
    pub fn new(metadata: AuthorityMetadata, schedules: Vec<FeeSchedule>) -> EngineResult<Self> {
        let mut sorted_schedules = schedules;
        sorted_schedules.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));

        if let Some(pair) = sorted_schedules
            .windows(2)
            .find(|pair| pair[0].effective_date == pair[1].effective_date)
        {
            return Err(EngineError::ConfigParseError {
                path: "schedules".to_string(),
                message: format!(
                    "more than one schedule takes effect on {}",
                    pair[0].effective_date
                ),
            });
        }

        Ok(Self {
            metadata,
            schedules: sorted_schedules,
        })
    }

    /// Creates a FeeConfig holding a single schedule.
    pub fn single(metadata: AuthorityMetadata, schedule: FeeSchedule) -> Self {
        Self {
            metadata,
            schedules: vec![schedule],
        }
    }

    /// Returns the authority metadata.
    pub fn authority(&self) -> &AuthorityMetadata {
        &self.metadata
    }

    /// Returns all schedules, oldest first.
    pub fn schedules(&self) -> &[FeeSchedule] {
        &self.schedules
    }
}
