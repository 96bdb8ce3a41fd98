//! Shared test doubles and fixtures

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tokio::sync::Mutex;
use tower::ServiceExt;

use meteo_gateway::Result;
use meteo_gateway::api::ApiState;
use meteo_gateway::channels::{Channel, OutgoingMessage};
use meteo_gateway::voice::Transcriber;
use meteo_gateway::weather::{CurrentWeather, WeatherProvider};

/// Mock chat channel recording every reply
pub struct MockChannel {
    sent: Mutex<Vec<OutgoingMessage>>,
    file_path: Option<String>,
    audio: Vec<u8>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            file_path: Some("voice/file_7.oga".to_string()),
            audio: b"OggS fake audio".to_vec(),
        }
    }

    /// A channel whose platform cannot resolve voice files
    pub fn without_file() -> Self {
        Self {
            file_path: None,
            ..Self::new()
        }
    }

    pub async fn sent_messages(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Channel for MockChannel {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        self.sent.lock().await.push(message);
        Ok(())
    }

    async fn get_file(&self, _file_id: &str) -> Result<Option<String>> {
        Ok(self.file_path.clone())
    }

    async fn download_file(&self, _file_path: &str) -> Result<Vec<u8>> {
        Ok(self.audio.clone())
    }
}

/// Mock weather provider answering every query with a canned payload
pub struct MockWeather {
    payload: Option<CurrentWeather>,
    calls: AtomicUsize,
}

impl MockWeather {
    /// Provider that knows every place
    pub fn known() -> Self {
        Self {
            payload: Some(sample_weather()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that knows no place (non-success status for every query)
    pub fn unknown() -> Self {
        Self {
            payload: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    async fn current_by_name(&self, _query: &str) -> Result<Option<CurrentWeather>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }

    async fn current_by_coords(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Option<CurrentWeather>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

/// Mock transcriber with a canned transcript
pub struct MockTranscriber {
    transcript: Option<String>,
    calls: AtomicUsize,
}

impl MockTranscriber {
    /// Transcriber that recognizes the given place name
    pub fn recognizing(text: &str) -> Self {
        Self {
            transcript: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Transcriber whose provider answers without a result field
    pub fn failing() -> Self {
        Self {
            transcript: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.transcript.clone())
    }
}

/// Provider payload shared across scenarios
pub fn sample_weather() -> CurrentWeather {
    serde_json::from_value(serde_json::json!({
        "weather": [{"description": "переменная облачность"}],
        "main": {"temp": 15.33, "feels_like": 14.78, "pressure": 1016, "humidity": 81},
        "visibility": 10000,
        "wind": {"speed": 3.5, "deg": 250},
        "sys": {"sunrise": 1_641_609_000_i64, "sunset": 1_641_660_300_i64}
    }))
    .expect("sample payload deserializes")
}

/// Expected full report for [`sample_weather`]
pub const SAMPLE_FULL_REPORT: &str = "переменная облачность.\n\
     Температура 15.3 ℃, ощущается как 14.8 ℃.\n\
     Атмосферное давление 1016 мм рт. ст.\n\
     Влажность 81 %.\n\
     Видимость 10000 метров.\n\
     Ветер 3.5 м/с З.\n\
     Восход солнца 05:30:00 МСК. Закат 19:45:00 МСК.";

/// A gateway wired with mocks, keeping handles to every double
pub struct TestGateway {
    pub channel: Arc<MockChannel>,
    pub weather: Arc<MockWeather>,
    pub transcriber: Arc<MockTranscriber>,
    pub app: Router,
}

/// Build a test gateway around the given doubles
pub fn build_gateway(
    channel: MockChannel,
    weather: MockWeather,
    transcriber: MockTranscriber,
) -> TestGateway {
    let channel = Arc::new(channel);
    let weather = Arc::new(weather);
    let transcriber = Arc::new(transcriber);

    let state = Arc::new(ApiState {
        channel: Some(channel.clone() as Arc<dyn Channel>),
        weather: weather.clone() as Arc<dyn WeatherProvider>,
        transcriber: transcriber.clone() as Arc<dyn Transcriber>,
    });

    TestGateway {
        channel,
        weather,
        transcriber,
        app: meteo_gateway::api::router(state),
    }
}

/// Build a gateway with no chat credential configured
pub fn build_disabled_gateway(weather: MockWeather) -> (Arc<MockWeather>, Router) {
    let weather = Arc::new(weather);

    let state = Arc::new(ApiState {
        channel: None,
        weather: weather.clone() as Arc<dyn WeatherProvider>,
        transcriber: Arc::new(MockTranscriber::failing()) as Arc<dyn Transcriber>,
    });

    (weather, meteo_gateway::api::router(state))
}

/// POST an update to the webhook endpoint, returning status and body
pub async fn post_update(app: Router, update: &serde_json::Value) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/webhooks/telegram")
                .header("content-type", "application/json")
                .body(Body::from(update.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body.to_vec())
}
