//! Speech-to-text (STT) processing

use async_trait::async_trait;
use reqwest::Client;

use crate::{Error, Result};

/// SpeechKit recognition API base URL
const API_BASE: &str = "https://stt.api.cloud.yandex.net";

/// Response from the SpeechKit recognition API
///
/// Error responses carry `error_code`/`error_message` instead of `result`;
/// the absent `result` is what callers branch on.
#[derive(serde::Deserialize)]
struct RecognizeResponse {
    result: Option<String>,
}

/// Speech recognition operations used by the voice pipeline
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe raw audio bytes
    ///
    /// Returns `Ok(None)` when the provider answered without a result
    /// field (recognition failed), which callers report back to the user.
    async fn transcribe(&self, audio: &[u8]) -> Result<Option<String>>;
}

/// Transcribes speech to text via the SpeechKit recognition API
#[derive(Debug, Clone)]
pub struct SpeechKit {
    client: Client,
    access_token: String,
    base_url: String,
}

impl SpeechKit {
    /// Create a new SpeechKit transcriber
    ///
    /// # Errors
    ///
    /// Returns error if the access token is empty
    pub fn new(access_token: String) -> Result<Self> {
        if access_token.is_empty() {
            return Err(Error::Config(
                "SpeechKit access token required".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            access_token,
            base_url: API_BASE.to_string(),
        })
    }

    /// Point the transcriber at an alternate base URL (used by tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Transcriber for SpeechKit {
    async fn transcribe(&self, audio: &[u8]) -> Result<Option<String>> {
        tracing::debug!(audio_bytes = audio.len(), "starting SpeechKit recognition");

        let url = format!("{}/speech/v1/stt:recognize", self.base_url);

        let body = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| Error::Stt(format!("SpeechKit request failed: {e}")))?
            .text()
            .await
            .map_err(|e| Error::Stt(format!("SpeechKit response read error: {e}")))?;

        let parsed: RecognizeResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Stt(format!("SpeechKit response parse error: {e}")))?;

        match &parsed.result {
            Some(text) => tracing::info!(transcript = %text, "recognition complete"),
            None => tracing::debug!("SpeechKit answered without a result"),
        }

        Ok(parsed.result)
    }
}
