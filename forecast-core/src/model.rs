use chrono::{NaiveDateTime, Timelike};
use serde_json::Value;
use std::fmt;

/// Timestamp of one forecast row.
///
/// The API sends ISO 8601 text; anything that does not parse is retained in
/// its original textual form rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    Parsed(NaiveDateTime),
    Text(String),
}

impl Timestamp {
    /// Parse an hourly timestamp, falling back to the raw text.
    ///
    /// Open-Meteo sends minute resolution ("2024-01-01T13:00"); seconds are
    /// accepted too.
    pub fn parse(s: &str) -> Self {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
            .map(Timestamp::Parsed)
            .unwrap_or_else(|_| Timestamp::Text(s.to_string()))
    }

    /// Best-effort conversion from a raw JSON entry. `None` for JSON null,
    /// which marks the row incomplete; non-string values degrade to their
    /// textual rendering.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::parse(s)),
            other => Some(Timestamp::Text(other.to_string())),
        }
    }

    /// Rows are ordered by this key. ISO renderings sort lexicographically
    /// in chronological order; unparsed text falls in by plain string order.
    pub fn sort_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Timestamp {
    /// Minute resolution, matching the API's hourly stamps; a non-zero
    /// seconds component is rendered rather than dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Parsed(dt) if dt.second() == 0 => {
                write!(f, "{}", dt.format("%Y-%m-%dT%H:%M"))
            }
            Timestamp::Parsed(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Timestamp::Text(s) => f.write_str(s),
        }
    }
}

/// One cleaned hourly forecast entry. Numeric fields are rounded to two
/// decimal places by the extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub timestamp: Timestamp,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_mps: f64,
}
