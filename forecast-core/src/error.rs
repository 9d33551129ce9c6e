use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForecastError>;

/// Everything that can abort a pipeline run.
///
/// Timestamp parse failures are deliberately absent: they are recovered
/// locally by keeping the original text (see [`crate::model::Timestamp`]).
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("request to Open-Meteo failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Open-Meteo returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode Open-Meteo response as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("latitude {latitude} must be in [-90, 90] and longitude {longitude} in [-180, 180]")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("expected a number for hourly.{field}[{index}], got {value}")]
    NotANumber {
        field: &'static str,
        index: usize,
        value: String,
    },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("failed to write CSV {}: {source}", .path.display())]
    WriteCsv { path: PathBuf, source: csv::Error },
}
