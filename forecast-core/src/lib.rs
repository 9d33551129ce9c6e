//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The fixed fetch configuration (location, coordinates, output paths)
//! - The Open-Meteo HTTP client and forecast URL builder
//! - Extraction of the hourly series into a cleaned, sorted table
//! - Persistence of the raw document (JSON) and the clean table (CSV)
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod persist;
pub mod provider;

pub use config::{ForecastConfig, HOURLY_VARIABLES};
pub use error::{ForecastError, Result};
pub use extract::clean_table;
pub use model::{ForecastRow, Timestamp};
pub use persist::{save_clean_csv, save_raw_json};
pub use provider::{OpenMeteoClient, forecast_url};
