use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use mufradat_config::Config;
use mufradat_core::pipeline::Resolver;
use mufradat_core::store::LexicalStore;
use mufradat_gen::{GeminiClient, GeminiOptions};
use mufradat_speech::SpeechClient;
use mufradat_store::CsvStore;
use mufradat_telegram::BotClient;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod messages;
pub mod poller;
pub mod report;
pub mod state;


use self::controller::AppController;
use self::state::AppState;

/// Telegram bot enriching Arabic words with a CEFR lexical profile
#[derive(Parser)]
#[command(name = "mufradat")]
struct Cli {
    /// Override the lexical store CSV path
    #[arg(long)]
    store: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = Config::new();
    if let Some(path) = &cli.store {
        config.store.csv_file = path.display().to_string();
    }
    if config.telegram.token.is_empty() {
        anyhow::bail!("TOKEN is not set");
    }
    if config.gemini.api_key.is_empty() {
        tracing::warn!("GENIE_API_KEY is not set; new words will resolve sentinel-filled");
    }

    let store = Arc::new(CsvStore::open(&config.store.csv_file)?);
    tracing::info!(rows = store.len(), "lexical store ready");

    let generator = Arc::new(GeminiClient::new(GeminiOptions {
        api_key: config.gemini.api_key.clone(),
        base_url: config.gemini.base_url.clone(),
        base_form_model: config.gemini.base_form_model.clone(),
        analysis_model: config.gemini.analysis_model.clone(),
        timeout: Duration::from_secs(config.timeout_seconds),
    }));
    let resolver = Arc::new(Resolver::new(store, generator));
    let telegram = BotClient::new(&config.telegram.api_url, &config.telegram.token);
    let speech = SpeechClient::new(
        config.speech.tts_url.clone(),
        Duration::from_secs(config.timeout_seconds),
    );

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(resolver, telegram, speech);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("a worker task exited"),
                Some(Ok(Err(e))) => tracing::error!("a worker task failed: {e}"),
                Some(Err(e)) => tracing::error!("a worker task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
