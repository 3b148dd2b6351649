use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    error::ParseError,
    forecast::aggregate,
    model::{CurrentWeather, DaySummary},
    parse::{parse_current, parse_forecast},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str = "Mozilla/5.0 (WeatherCLI)";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// GET an endpoint and return its body. Any transport failure yields an
    /// empty body; error statuses still return whatever the server sent.
    async fn get_body(&self, endpoint: &str, city: &str) -> String {
        let url = format!("{}/data/2.5/{endpoint}", self.base_url);
        debug!(%url, city, "requesting OpenWeather");

        let res = match self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
        {
            Ok(res) => res,
            Err(err) => {
                warn!(endpoint, error = %err, "OpenWeather request failed");
                return String::new();
            }
        };

        let status = res.status();
        if !status.is_success() {
            debug!(endpoint, %status, "OpenWeather returned an error status");
        }

        match res.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(endpoint, error = %err, "Failed to read OpenWeather response body");
                String::new()
            }
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<CurrentWeather, ParseError> {
        let body = self.get_body("weather", city).await;
        parse_current(&body)
    }

    async fn forecast(&self, city: &str) -> Result<Vec<DaySummary>, ParseError> {
        let body = self.get_body("forecast", city).await;
        let samples = parse_forecast(&body)?;
        debug!(samples = samples.len(), "aggregating forecast");
        Ok(aggregate(&samples))
    }
}
