use clap::Parser;
use std::path::PathBuf;

use forecast_core::{
    ForecastConfig, ForecastRow, OpenMeteoClient, clean_table, save_clean_csv, save_raw_json,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Fetch the Open-Meteo hourly forecast for Cork"
)]
pub struct Cli {
    /// Directory the raw JSON and clean CSV are written to.
    #[arg(long, default_value = "data")]
    pub output_dir: PathBuf,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = ForecastConfig::default().with_output_dir(self.output_dir);

        println!(
            "Fetching forecast for {} ({},{})…",
            config.location, config.latitude, config.longitude
        );

        let client = OpenMeteoClient::new()?;
        let raw = client.fetch_hourly(&config).await?;

        let raw_path = save_raw_json(&config, &raw)?;
        println!("Saved raw JSON → {}", raw_path.display());

        let table = clean_table(&raw)?;
        let clean_path = save_clean_csv(&config, &table)?;
        println!("Clean CSV saved → {}", clean_path.display());

        print_preview(&table);

        Ok(())
    }
}

const PREVIEW_ROWS: usize = 8;

/// Quick console preview of the first few cleaned rows.
fn print_preview(table: &[ForecastRow]) {
    println!(
        "{:<18} {:>13} {:>16} {:>14}",
        "timestamp", "temperature_c", "precipitation_mm", "wind_speed_mps"
    );

    for row in table.iter().take(PREVIEW_ROWS) {
        println!(
            "{:<18} {:>13.2} {:>16.2} {:>14.2}",
            row.timestamp.to_string(),
            row.temperature_c,
            row.precipitation_mm,
            row.wind_speed_mps
        );
    }
}
