//! Inbound message dispatch
//!
//! Classifies a message as command, text, location, voice or unsupported
//! and routes it to the matching weather path. Every dispatched message
//! produces exactly one reply.

use super::types::{TelegramLocation, TelegramMessage, TelegramVoice};
use crate::Result;
use crate::api::ApiState;
use crate::channels::{Channel, OutgoingMessage};
use crate::voice::MAX_VOICE_DURATION_SECS;
use crate::weather::report;

/// Commands answered with the fixed start/help reply
const BOT_COMMANDS: &[&str] = &["/start", "/help"];

/// Reply to /start and /help
const START_REPLY: &str = "Я расскажу о текущей погоде для населенного пункта.\n\n\
                           Я могу ответить на:\n\
                           - Текстовое сообщение с названием населенного пункта.\n\
                           - Голосовое сообщение с названием населенного пункта.\n\
                           - Сообщение с геопозицией.";

/// Reply to message types the bot cannot answer
const UNSUPPORTED_REPLY: &str = "Я не могу ответить на такой тип сообщения.\n\
                                 Но могу ответить на:\n\
                                 - Текстовое сообщение с названием населенного пункта.\n\
                                 - Голосовое сообщение с названием населенного пункта.\n\
                                 - Сообщение с геопозицией.";

/// Reply for a coordinate query the provider does not know
const LOCATION_UNKNOWN_REPLY: &str = "Я не знаю какая погода в этом месте.";

/// Reply when the voice clip exceeds the duration limit
const VOICE_TOO_LONG_REPLY: &str = "Я не могу обработать это голосовое сообщение.";

/// Reply when the voice file could not be resolved
const VOICE_FETCH_FAILED_REPLY: &str = "Не удалось получить голосовое сообщение";

/// Reply when recognition produced no result
const VOICE_RECOGNIZE_FAILED_REPLY: &str = "Не удалось распознать голосовое сообщение";

/// Route a message to its handler
///
/// A `bot_command` entity combined with a recognized command text short-
/// circuits to the start reply and never falls through to a weather
/// lookup.
pub(crate) async fn dispatch(
    state: &ApiState,
    channel: &dyn Channel,
    message: &TelegramMessage,
) -> Result<()> {
    if let Some(text) = message.text.as_deref() {
        if is_command(message, text) {
            return reply(channel, message, START_REPLY.to_string()).await;
        }
        return handle_text(state, channel, message, text).await;
    }

    if let Some(location) = &message.location {
        return handle_location(state, channel, message, location).await;
    }

    if let Some(voice) = &message.voice {
        return handle_voice(state, channel, message, voice).await;
    }

    reply(channel, message, UNSUPPORTED_REPLY.to_string()).await
}

/// A message is a command when a `bot_command` entity is present AND the
/// literal text is one of the recognized commands
fn is_command(message: &TelegramMessage, text: &str) -> bool {
    message
        .entities
        .as_deref()
        .unwrap_or_default()
        .iter()
        .any(|entity| entity.kind == "bot_command")
        && BOT_COMMANDS.contains(&text)
}

/// Text-weather path: the text is a free-form place-name query
async fn handle_text(
    state: &ApiState,
    channel: &dyn Channel,
    message: &TelegramMessage,
    query: &str,
) -> Result<()> {
    match state.weather.current_by_name(query).await? {
        Some(weather) => {
            let text = report::full_report(&weather)?;
            reply(channel, message, text).await
        }
        None => reply(channel, message, place_not_found(query)).await,
    }
}

/// Location-weather path: coordinates are forwarded as received
async fn handle_location(
    state: &ApiState,
    channel: &dyn Channel,
    message: &TelegramMessage,
    location: &TelegramLocation,
) -> Result<()> {
    match state
        .weather
        .current_by_coords(location.latitude, location.longitude)
        .await?
    {
        Some(weather) => {
            let text = report::full_report(&weather)?;
            reply(channel, message, text).await
        }
        None => reply(channel, message, LOCATION_UNKNOWN_REPLY.to_string()).await,
    }
}

/// Voice pipeline: duration gate, file resolution, download, recognition,
/// then the place-name weather path with the condensed reply format.
///
/// Linear with no retries; the first failing stage sends its reply and
/// ends the invocation.
async fn handle_voice(
    state: &ApiState,
    channel: &dyn Channel,
    message: &TelegramMessage,
    voice: &TelegramVoice,
) -> Result<()> {
    if voice.duration > MAX_VOICE_DURATION_SECS {
        return reply(channel, message, VOICE_TOO_LONG_REPLY.to_string()).await;
    }

    let Some(file_path) = channel.get_file(&voice.file_id).await? else {
        return reply(channel, message, VOICE_FETCH_FAILED_REPLY.to_string()).await;
    };

    let audio = channel.download_file(&file_path).await?;

    let Some(place) = state.transcriber.transcribe(&audio).await? else {
        return reply(channel, message, VOICE_RECOGNIZE_FAILED_REPLY.to_string()).await;
    };

    match state.weather.current_by_name(&place).await? {
        Some(weather) => {
            let text = report::voice_report(&place, &weather)?;
            reply(channel, message, text).await
        }
        None => reply(channel, message, place_not_found(&place)).await,
    }
}

/// Not-found reply echoing the query verbatim
fn place_not_found(query: &str) -> String {
    format!("Я не нашел населенный пункт \"{query}\"")
}

/// Send a reply threaded under the originating message
async fn reply(channel: &dyn Channel, message: &TelegramMessage, text: String) -> Result<()> {
    channel
        .send(OutgoingMessage::reply(message.chat.id, text, message.message_id))
        .await
}
