use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meteo_gateway::channels::{Channel, TelegramChannel};
use meteo_gateway::voice::SpeechKit;
use meteo_gateway::weather::OpenWeather;
use meteo_gateway::{Config, api};

/// Meteo - Telegram weather bot webhook gateway
#[derive(Parser)]
#[command(name = "meteo", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "METEO_PORT", default_value = "8080")]
    port: u16,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,meteo_gateway=info",
        1 => "info,meteo_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let channel = config
        .telegram_token
        .clone()
        .map(|token| Arc::new(TelegramChannel::new(token)) as Arc<dyn Channel>);

    let weather = Arc::new(OpenWeather::new(config.openweather_token.clone())?);
    let transcriber = Arc::new(SpeechKit::new(config.stt_access_token.clone())?);

    let state = Arc::new(api::ApiState {
        channel,
        weather,
        transcriber,
    });

    api::serve(state, cli.port).await?;

    Ok(())
}
