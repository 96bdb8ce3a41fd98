//! Chat platform adapters
//!
//! The `Channel` trait is the seam between dispatch logic and the chat
//! platform's HTTP API.

mod telegram;

use async_trait::async_trait;

pub use telegram::TelegramChannel;

use crate::Result;

/// A reply addressed to the chat a message came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Target chat identifier
    pub chat_id: i64,

    /// Reply text (plain text, preformatted)
    pub text: String,

    /// Message ID this reply is threaded under
    pub reply_to: Option<i64>,
}

impl OutgoingMessage {
    /// Create a reply threaded under the originating message
    #[must_use]
    pub const fn reply(chat_id: i64, text: String, reply_to: i64) -> Self {
        Self {
            chat_id,
            text,
            reply_to: Some(reply_to),
        }
    }
}

/// Chat platform operations used by the dispatcher
#[async_trait]
pub trait Channel: Send + Sync {
    /// Get the channel name
    fn name(&self) -> &'static str;

    /// Send a message
    async fn send(&self, message: OutgoingMessage) -> Result<()>;

    /// Resolve a file identifier to a download path
    ///
    /// Returns `Ok(None)` when the platform's response carries no result
    /// payload for the file.
    async fn get_file(&self, file_id: &str) -> Result<Option<String>>;

    /// Download raw file bytes by the path returned from [`Self::get_file`]
    async fn download_file(&self, file_path: &str) -> Result<Vec<u8>>;
}
