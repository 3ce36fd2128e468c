//! Configuration loading and management for the Government Fee Engine.
//!
//! This module provides functionality to load fee schedules from YAML files,
//! including authority metadata and effective-dated rates.
//!
//! # Example
//!
//! ```no_run
//! use gov_fee_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ksa").unwrap();
//! println!("Loaded schedule: {}", config.authority().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AuthorityMetadata, FeeConfig, FeeSchedule, LaborOfficeRates, MedicalInsuranceRates,
    PaymentTerms, ResidencyRates, SocialInsuranceRates,
};
