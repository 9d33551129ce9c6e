use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::{ForecastConfig, HOURLY_VARIABLES};
use crate::error::{ForecastError, Result};

const BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Whole-request timeout, connect through body.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the forecast query URL.
///
/// The timezone name contains a slash, which must stay percent-encoded for
/// the URL to remain valid.
pub fn forecast_url(config: &ForecastConfig) -> String {
    forecast_url_at(BASE_URL, config)
}

fn forecast_url_at(base_url: &str, config: &ForecastConfig) -> String {
    format!(
        "{base_url}?latitude={}&longitude={}&hourly={}&timezone={}",
        config.latitude,
        config.longitude,
        HOURLY_VARIABLES.join(","),
        config.timezone.replace('/', "%2F"),
    )
}

/// Client for the Open-Meteo forecast endpoint. No API key is required.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different forecast endpoint, e.g. a local
    /// stand-in server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One GET against the forecast endpoint; the decoded body is returned
    /// as a loosely-typed document.
    ///
    /// Any network failure, non-2xx status, or undecodable body aborts the
    /// run. No retry, no caching.
    pub async fn fetch_hourly(&self, config: &ForecastConfig) -> Result<Value> {
        let url = forecast_url_at(&self.base_url, config);
        debug!("GET {url}");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so the slice cannot split a multibyte
    // character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &body[..end])
}
