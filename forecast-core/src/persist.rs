use log::info;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::model::ForecastRow;

/// Column order matches [`crate::config::HOURLY_VARIABLES`], prefixed by the
/// timestamp.
pub const CSV_HEADER: [&str; 4] = [
    "timestamp",
    "temperature_c",
    "precipitation_mm",
    "wind_speed_mps",
];

/// Create the output directory if it is not already there. Safe to call on
/// every write.
fn ensure_output_dir(config: &ForecastConfig) -> Result<()> {
    fs::create_dir_all(&config.output_dir).map_err(|source| ForecastError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })
}

/// Write the raw document, pretty-printed, to `<location>_raw.json`,
/// overwriting any previous run's file.
pub fn save_raw_json(config: &ForecastConfig, raw: &Value) -> Result<PathBuf> {
    ensure_output_dir(config)?;

    let path = config.raw_path();
    let text = serde_json::to_string_pretty(raw)?;

    fs::write(&path, text).map_err(|source| ForecastError::WriteFile {
        path: path.clone(),
        source,
    })?;

    info!("raw JSON written to {}", path.display());
    Ok(path)
}

/// Write the clean table to `<location>_clean.csv`, header first, one record
/// per row, overwriting any previous run's file.
///
/// Zero rows still produce a valid header-only file.
pub fn save_clean_csv(config: &ForecastConfig, rows: &[ForecastRow]) -> Result<PathBuf> {
    ensure_output_dir(config)?;

    let path = config.clean_path();
    let csv_err = |source| ForecastError::WriteCsv {
        path: path.clone(),
        source,
    };

    let mut writer = csv::Writer::from_path(&path).map_err(csv_err)?;

    writer.write_record(CSV_HEADER).map_err(csv_err)?;

    for row in rows {
        writer
            .write_record([
                row.timestamp.to_string(),
                row.temperature_c.to_string(),
                row.precipitation_mm.to_string(),
                row.wind_speed_mps.to_string(),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|source| ForecastError::WriteFile {
        path: path.clone(),
        source,
    })?;

    info!("clean CSV written to {} ({} rows)", path.display(), rows.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Timestamp;
    use serde_json::json;
    use tempfile::tempdir;

    fn test_config(dir: &std::path::Path) -> ForecastConfig {
        ForecastConfig::default().with_output_dir(dir)
    }

    fn sample_rows() -> Vec<ForecastRow> {
        vec![
            ForecastRow {
                timestamp: Timestamp::parse("2024-01-01T00:00"),
                temperature_c: 5.0,
                precipitation_mm: 0.0,
                wind_speed_mps: 3.33,
            },
            ForecastRow {
                timestamp: Timestamp::parse("2024-01-01T01:00"),
                temperature_c: 5.26,
                precipitation_mm: 0.1,
                wind_speed_mps: 4.0,
            },
        ]
    }

    #[test]
    fn raw_json_round_trips_deep_equal() {
        let dir = tempdir().unwrap();
        let cfg = test_config(dir.path());
        let raw = json!({
            "latitude": 51.9,
            "hourly": {"time": ["2024-01-01T00:00"], "temperature_2m": [5.0]}
        });

        let path = save_raw_json(&cfg, &raw).unwrap();

        let text = fs::read_to_string(path).unwrap();
        let read_back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(read_back, raw);
    }

    #[test]
    fn clean_csv_has_header_and_one_record_per_row() {
        let dir = tempdir().unwrap();
        let cfg = test_config(dir.path());

        let path = save_clean_csv(&cfg, &sample_rows()).unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert_eq!(
            text,
            "timestamp,temperature_c,precipitation_mm,wind_speed_mps\n\
             2024-01-01T00:00,5,0,3.33\n\
             2024-01-01T01:00,5.26,0.1,4\n"
        );
    }

    #[test]
    fn zero_rows_produce_a_header_only_file() {
        let dir = tempdir().unwrap();
        let cfg = test_config(dir.path());

        let path = save_clean_csv(&cfg, &[]).unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text, "timestamp,temperature_c,precipitation_mm,wind_speed_mps\n");
    }

    #[test]
    fn rewriting_unchanged_data_is_byte_identical() {
        let dir = tempdir().unwrap();
        let cfg = test_config(dir.path());
        let raw = json!({"hourly": {"time": ["2024-01-01T00:00"]}});
        let rows = sample_rows();

        save_raw_json(&cfg, &raw).unwrap();
        save_clean_csv(&cfg, &rows).unwrap();
        let first_raw = fs::read(cfg.raw_path()).unwrap();
        let first_clean = fs::read(cfg.clean_path()).unwrap();

        save_raw_json(&cfg, &raw).unwrap();
        save_clean_csv(&cfg, &rows).unwrap();

        assert_eq!(fs::read(cfg.raw_path()).unwrap(), first_raw);
        assert_eq!(fs::read(cfg.clean_path()).unwrap(), first_clean);
    }

    #[test]
    fn a_shorter_rewrite_leaves_no_stale_tail() {
        let dir = tempdir().unwrap();
        let cfg = test_config(dir.path());

        save_clean_csv(&cfg, &sample_rows()).unwrap();
        save_clean_csv(&cfg, &sample_rows()[..1]).unwrap();

        let text = fs::read_to_string(cfg.clean_path()).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn output_dir_is_created_when_absent() {
        let dir = tempdir().unwrap();
        let cfg = test_config(&dir.path().join("nested").join("data"));

        let path = save_raw_json(&cfg, &json!({})).unwrap();
        assert!(path.exists());
    }
}
