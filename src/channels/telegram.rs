//! Telegram channel adapter
//!
//! Receives updates via webhook and replies through the Bot API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Channel, OutgoingMessage};
use crate::{Error, Result};

/// Telegram Bot API base URL
const API_BASE: &str = "https://api.telegram.org/bot";

/// Telegram file download base URL
const FILE_BASE: &str = "https://api.telegram.org/file/bot";

/// Telegram channel adapter
#[derive(Debug, Clone)]
pub struct TelegramChannel {
    token: String,
    client: Client,
    api_base: String,
    file_base: String,
}

impl TelegramChannel {
    /// Create a new Telegram channel adapter
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: Client::new(),
            api_base: API_BASE.to_string(),
            file_base: FILE_BASE.to_string(),
        }
    }

    /// Create an adapter pointed at alternate base URLs
    ///
    /// Used by tests to target a mock server instead of `api.telegram.org`.
    #[must_use]
    pub fn with_base_urls(
        token: String,
        api_base: impl Into<String>,
        file_base: impl Into<String>,
    ) -> Self {
        Self {
            token,
            client: Client::new(),
            api_base: api_base.into(),
            file_base: file_base.into(),
        }
    }

    /// Send a message to a chat, optionally threaded as a reply
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    pub async fn send_message(&self, chat_id: i64, text: &str, reply_to: Option<i64>) -> Result<()> {
        let url = format!("{}{}/sendMessage", self.api_base, self.token);

        let request = SendMessageRequest {
            chat_id,
            text: text.to_string(),
            reply_to_message_id: reply_to,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Channel(format!("Telegram sendMessage error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Channel(format!(
                "Telegram sendMessage error: {status} - {body}"
            )));
        }

        tracing::debug!(chat_id, "Telegram message sent");
        Ok(())
    }

    /// Resolve a `file_id` to a download path via `getFile`
    ///
    /// Returns `Ok(None)` when the response envelope carries no result,
    /// which the voice pipeline reports back to the user.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the result lacks a path
    pub async fn resolve_file(&self, file_id: &str) -> Result<Option<String>> {
        let url = format!("{}{}/getFile", self.api_base, self.token);

        let request = GetFileRequest {
            file_id: file_id.to_string(),
        };

        let body = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Channel(format!("Telegram getFile error: {e}")))?
            .text()
            .await
            .map_err(|e| Error::Channel(format!("Telegram getFile response read error: {e}")))?;

        let parsed: TelegramResponse<TelegramFile> = serde_json::from_str(&body)
            .map_err(|e| Error::Channel(format!("Telegram getFile parse error: {e}")))?;

        let Some(file) = parsed.result else {
            tracing::debug!(
                file_id,
                description = parsed.description.as_deref().unwrap_or_default(),
                "Telegram getFile returned no result"
            );
            return Ok(None);
        };

        let file_path = file.file_path.ok_or_else(|| {
            Error::Channel("Telegram getFile result missing file_path".to_string())
        })?;

        Ok(Some(file_path))
    }

    /// Download raw file bytes from the file-serving endpoint
    ///
    /// # Errors
    ///
    /// Returns error if the download request fails
    pub async fn download(&self, file_path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}/{file_path}", self.file_base, self.token);

        let data = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Channel(format!("Telegram file download error: {e}")))?
            .bytes()
            .await
            .map_err(|e| Error::Channel(format!("Telegram file download read error: {e}")))?;

        Ok(data.to_vec())
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        self.send_message(message.chat_id, &message.text, message.reply_to)
            .await
    }

    async fn get_file(&self, file_id: &str) -> Result<Option<String>> {
        self.resolve_file(file_id).await
    }

    async fn download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        self.download(file_path).await
    }
}

/// Telegram sendMessage request
#[derive(Serialize)]
struct SendMessageRequest {
    chat_id: i64,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
}

/// Telegram getFile request
#[derive(Serialize)]
struct GetFileRequest {
    file_id: String,
}

/// Generic Bot API response envelope
#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    result: Option<T>,
    description: Option<String>,
}

/// File metadata from a Telegram getFile response
#[derive(Debug, Deserialize)]
struct TelegramFile {
    file_path: Option<String>,
}
