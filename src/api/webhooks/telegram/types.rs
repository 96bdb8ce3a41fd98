//! Telegram webhook types

use serde::{Deserialize, Serialize};

/// Telegram Update object (simplified)
#[derive(Debug, Deserialize, Serialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
}

/// Telegram Message object (simplified)
#[derive(Debug, Deserialize, Serialize)]
pub struct TelegramMessage {
    pub message_id: i64,
    pub chat: TelegramChat,
    pub text: Option<String>,
    /// Entity tags on the text (commands, mentions, ...)
    pub entities: Option<Vec<TelegramEntity>>,
    /// Voice message
    pub voice: Option<TelegramVoice>,
    /// Shared geoposition
    pub location: Option<TelegramLocation>,
}

/// Telegram Chat object
#[derive(Debug, Deserialize, Serialize)]
pub struct TelegramChat {
    pub id: i64,
}

/// A tagged span inside a message text
#[derive(Debug, Deserialize, Serialize)]
pub struct TelegramEntity {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Telegram voice message descriptor
#[derive(Debug, Deserialize, Serialize)]
pub struct TelegramVoice {
    pub file_id: String,
    /// Declared clip duration in seconds
    pub duration: i64,
}

/// Shared location
#[derive(Debug, Deserialize, Serialize)]
pub struct TelegramLocation {
    pub latitude: f64,
    pub longitude: f64,
}
