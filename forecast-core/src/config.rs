use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ForecastError, Result};

/// Hourly variables requested from the API, in clean-table column order.
pub const HOURLY_VARIABLES: [&str; 3] = ["temperature_2m", "precipitation", "wind_speed_10m"];

/// Fixed fetch configuration, constructed once at startup and passed by
/// reference into every pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Location label, used for printing and for output file names.
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name, e.g. "Europe/Dublin". Controls how the API
    /// formats the hourly timestamps.
    pub timezone: String,
    /// Directory both output files are written under.
    pub output_dir: PathBuf,
}

impl Default for ForecastConfig {
    /// Cork, Ireland.
    fn default() -> Self {
        Self {
            location: "Cork".to_string(),
            latitude: 51.8985,
            longitude: -8.4756,
            timezone: "Europe/Dublin".to_string(),
            output_dir: PathBuf::from("data"),
        }
    }
}

impl ForecastConfig {
    pub fn new(
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ForecastError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            location: location.into(),
            latitude,
            longitude,
            timezone: timezone.into(),
            output_dir: output_dir.into(),
        })
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Path of the raw JSON dump, `<location>_raw.json` under the output dir.
    pub fn raw_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_raw.json", self.location.to_lowercase()))
    }

    /// Path of the clean CSV, `<location>_clean.csv` under the output dir.
    pub fn clean_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_clean.csv", self.location.to_lowercase()))
    }
}
