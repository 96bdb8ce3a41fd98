//! Weather provider adapter and report formatting
//!
//! Queries the OpenWeather current-weather API by place name or by
//! coordinate and renders the payload into chat replies.

pub mod report;
pub mod wind;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub use wind::WindSector;

use crate::{Error, Result};

/// OpenWeather API base URL
const API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Reply language for condition descriptions
const DEFAULT_LANG: &str = "ru";

/// Unit system for temperatures and wind speed
const DEFAULT_UNITS: &str = "metric";

/// Current-weather payload as returned by the provider
///
/// Every field the report needs is required; a payload missing one of them
/// fails deserialization and surfaces as an error instead of defaulting.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    /// Condition list; the report uses the leading entry's description
    pub weather: Vec<WeatherCondition>,
    /// Main readings block
    pub main: MainReadings,
    /// Visibility in meters
    pub visibility: i64,
    /// Wind readings
    pub wind: Wind,
    /// Sunrise and sunset timestamps
    pub sys: SunTimes,
}

/// A single weather condition entry
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    /// Localized condition description
    pub description: String,
}

/// Temperature, pressure and humidity readings
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Temperature in degrees Celsius
    pub temp: f64,
    /// Perceived temperature in degrees Celsius
    pub feels_like: f64,
    /// Atmospheric pressure
    pub pressure: f64,
    /// Humidity percentage
    pub humidity: f64,
}

/// Wind readings
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s
    pub speed: f64,
    /// Compass bearing in degrees
    pub deg: f64,
}

/// Sunrise and sunset as Unix timestamps (UTC)
#[derive(Debug, Clone, Deserialize)]
pub struct SunTimes {
    /// Sunrise timestamp
    pub sunrise: i64,
    /// Sunset timestamp
    pub sunset: i64,
}

/// Weather lookup operations used by the dispatcher
///
/// `Ok(None)` means the provider answered with a non-success status for the
/// query (place unknown), which callers turn into a not-found reply.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current weather for a free-text place name
    async fn current_by_name(&self, query: &str) -> Result<Option<CurrentWeather>>;

    /// Current weather for a coordinate pair
    async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<CurrentWeather>>;
}

/// OpenWeather API client
#[derive(Debug, Clone)]
pub struct OpenWeather {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeather {
    /// Create a new OpenWeather client
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::Config(
                "OpenWeather API key required".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: API_BASE.to_string(),
        })
    }

    /// Point the client at an alternate base URL (used by tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run a current-weather query with the given selector parameters
    ///
    /// The provider signals an unknown place with a non-success status,
    /// which maps to `Ok(None)`. Transport faults and malformed payloads
    /// propagate as errors.
    async fn fetch(&self, selector: &[(&str, String)]) -> Result<Option<CurrentWeather>> {
        let url = format!("{}/weather", self.base_url);

        let mut params = vec![
            ("appid", self.api_key.clone()),
            ("lang", DEFAULT_LANG.to_string()),
            ("units", DEFAULT_UNITS.to_string()),
        ];
        params.extend_from_slice(selector);

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "OpenWeather reported non-success");
            return Ok(None);
        }

        let payload = response.json::<CurrentWeather>().await?;
        Ok(Some(payload))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeather {
    async fn current_by_name(&self, query: &str) -> Result<Option<CurrentWeather>> {
        self.fetch(&[("q", query.to_string())]).await
    }

    async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<CurrentWeather>> {
        self.fetch(&[
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
        ])
        .await
    }
}
