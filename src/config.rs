//! Configuration for the meteo gateway

use crate::{Error, Result};

/// Gateway configuration, read once at startup and immutable afterwards
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    ///
    /// When absent the deployment is treated as disabled: every webhook
    /// update is acknowledged and dropped without side effects.
    pub telegram_token: Option<String>,

    /// `OpenWeather` API key
    pub openweather_token: String,

    /// Bearer token for the speech recognition provider
    pub stt_access_token: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` (optional), `OPEN_WEATHER_TOKEN` and
    /// `STT_ACCESS_TOKEN` (both required).
    ///
    /// # Errors
    ///
    /// Returns error if a required credential is missing or empty
    pub fn from_env() -> Result<Self> {
        let telegram_token = read_env("TELEGRAM_BOT_TOKEN");
        if telegram_token.is_none() {
            tracing::warn!("TELEGRAM_BOT_TOKEN not set, updates will be acknowledged and dropped");
        }

        let openweather_token = read_env("OPEN_WEATHER_TOKEN")
            .ok_or_else(|| Error::Config("OPEN_WEATHER_TOKEN is not set".to_string()))?;

        let stt_access_token = read_env("STT_ACCESS_TOKEN")
            .ok_or_else(|| Error::Config("STT_ACCESS_TOKEN is not set".to_string()))?;

        Ok(Self {
            telegram_token,
            openweather_token,
            stt_access_token,
        })
    }
}

/// Read an environment variable, treating empty values as unset
fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
