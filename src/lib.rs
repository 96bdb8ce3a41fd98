//! Meteo Gateway - Telegram weather bot webhook gateway
//!
//! A stateless webhook service behind a Telegram bot that reports the
//! current weather. Each inbound update is classified (command, text,
//! location, voice, unsupported) and answered with exactly one reply:
//! place-name and coordinate queries go straight to the weather provider,
//! voice clips are downloaded and transcribed first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Telegram Bot API                     │
//! │       webhook update  │  sendMessage / getFile      │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                 Meteo Gateway                        │
//! │   Dispatch  │  Weather report  │  Voice pipeline    │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │            External providers                        │
//! │   OpenWeather  │  SpeechKit STT                     │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod channels;
pub mod config;
pub mod error;
pub mod voice;
pub mod weather;

pub use config::Config;
pub use error::{Error, Result};
