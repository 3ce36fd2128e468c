//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fee
//! schedules from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AuthorityMetadata, FeeConfig, FeeSchedule};

/// Loads and provides access to fee schedule configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and answers which schedule applies on a given date.
///
/// # Directory Structure
///
/// ```text
/// config/ksa/
/// ├── authority.yaml       # Schedule metadata
/// └── rates/
///     └── 2025-01-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use gov_fee_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ksa").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let schedule = loader.get_schedule(date).unwrap();
/// println!("Residency fee: {}", schedule.residency.annual);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FeeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `authority.yaml` or the `rates` directory is missing
    /// - Any file contains invalid YAML
    /// - A schedule has a negative rate or a social insurance rate above 1
    /// - Two schedules share an effective date
    /// - The `rates` directory holds no schedule files
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let rates_dir = path.join("rates");

        let metadata = Self::load_yaml::<AuthorityMetadata>(&path.join("authority.yaml"))?;
        let schedules = Self::load_schedules(&rates_dir)?;

        let config = FeeConfig::new(metadata, schedules).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: rates_dir.display().to_string(),
                message,
            },
            other => other,
        })?;

        Ok(Self { config })
    }

    /// Builds a loader around the built-in standard schedule, without
    /// touching the filesystem.
    pub fn standard() -> Self {
        let metadata = AuthorityMetadata {
            code: "KSA".to_string(),
            name: "Saudi government fees (built-in)".to_string(),
            version: "standard".to_string(),
            source_url: String::new(),
        };
        Self {
            config: FeeConfig::single(metadata, FeeSchedule::standard()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all schedule files from the rates directory.
    fn load_schedules(rates_dir: &Path) -> EngineResult<Vec<FeeSchedule>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut schedules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<FeeSchedule>(&path)?;
                schedule
                    .validate()
                    .map_err(|message| EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message,
                    })?;
                schedules.push(schedule);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no schedule files found)", rates_dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying fee configuration.
    pub fn config(&self) -> &FeeConfig {
        &self.config
    }

    /// Returns the authority metadata.
    pub fn authority(&self) -> &AuthorityMetadata {
        self.config.authority()
    }

    /// Gets the schedule in force on a given date.
    ///
    /// Picks the most recent schedule whose effective date is on or before
    /// `date`.
    pub fn get_schedule(&self, date: NaiveDate) -> EngineResult<&FeeSchedule> {
        self.config
            .schedules()
            .iter()
            .rev()
            .find(|schedule| schedule.effective_date <= date)
            .ok_or(EngineError::ScheduleNotFound { date })
    }
}
