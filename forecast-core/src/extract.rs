use log::debug;
use serde_json::Value;

use crate::error::{ForecastError, Result};
use crate::model::{ForecastRow, Timestamp};

/// Hourly series under `hourly.<key>`; an absent key or a non-array value
/// degrades to an empty series.
fn series<'a>(raw: &'a Value, key: &str) -> &'a [Value] {
    raw.get("hourly")
        .and_then(|hourly| hourly.get(key))
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Coerce one numeric entry. `Ok(None)` for JSON null, so the row can be
/// dropped as incomplete; any other non-numeric value is a hard error.
fn number(field: &'static str, index: usize, value: &Value) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        other => other
            .as_f64()
            .map(|v| Some(round2(v)))
            .ok_or_else(|| ForecastError::NotANumber {
                field,
                index,
                value: other.to_string(),
            }),
    }
}

/// Zip the four hourly series into cleaned rows, sorted ascending by
/// timestamp.
///
/// The series are index-aligned by the API contract; if their lengths
/// disagree, only the overlap up to the shortest is processed. Rows with a
/// null in any field are dropped. Numeric values are rounded to two decimal
/// places.
pub fn clean_table(raw: &Value) -> Result<Vec<ForecastRow>> {
    let times = series(raw, "time");
    let temperature = series(raw, "temperature_2m");
    let precipitation = series(raw, "precipitation");
    let wind = series(raw, "wind_speed_10m");

    let len = times
        .len()
        .min(temperature.len())
        .min(precipitation.len())
        .min(wind.len());

    let mut rows = Vec::with_capacity(len);

    for i in 0..len {
        let Some(timestamp) = Timestamp::from_value(&times[i]) else {
            continue;
        };
        let Some(temperature_c) = number("temperature_2m", i, &temperature[i])? else {
            continue;
        };
        let Some(precipitation_mm) = number("precipitation", i, &precipitation[i])? else {
            continue;
        };
        let Some(wind_speed_mps) = number("wind_speed_10m", i, &wind[i])? else {
            continue;
        };

        rows.push(ForecastRow {
            timestamp,
            temperature_c,
            precipitation_mm,
            wind_speed_mps,
        });
    }

    rows.sort_by_cached_key(|row| row.timestamp.sort_key());

    debug!(
        "built {} clean rows from {} time entries",
        rows.len(),
        times.len()
    );

    Ok(rows)
}
