//! Optional TOML configuration file.
//!
//! ```toml
//! default_duration_minutes = 100
//! available_dates = ["2026-03-14", "2026-03-15"]
//! ```
//!
//! Command-line flags override the file; the file overrides built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use schedule_engine::{AvailabilityConstraint, CatalogOptions};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub default_duration_minutes: Option<u32>,
    pub available_dates: Vec<NaiveDate>,
}

impl FileConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn catalog_options(&self, flag: Option<u32>) -> CatalogOptions {
        match flag.or(self.default_duration_minutes) {
            Some(minutes) => CatalogOptions::with_default_duration(minutes),
            None => CatalogOptions::default(),
        }
    }

    /// Dates from the command line when any were given, else from the file.
    pub fn availability(&self, flag: &[NaiveDate]) -> AvailabilityConstraint {
        if flag.is_empty() {
            AvailabilityConstraint::from_dates(self.available_dates.iter().copied())
        } else {
            AvailabilityConstraint::from_dates(flag.iter().copied())
        }
    }
}
