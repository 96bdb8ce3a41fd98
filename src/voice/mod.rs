//! Voice message processing

mod stt;

pub use stt::{SpeechKit, Transcriber};

/// Longest voice clip the pipeline accepts, in seconds
pub const MAX_VOICE_DURATION_SECS: i64 = 30;
