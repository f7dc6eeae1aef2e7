use std::env;

use serde::{Deserialize, Serialize};

use self::gemini::GeminiConfig;
use self::speech::SpeechConfig;
use self::store::StoreConfig;
use self::telegram::TelegramConfig;

pub mod gemini;
pub mod speech;
pub mod store;
pub mod telegram;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub gemini: GeminiConfig,
    pub speech: SpeechConfig,
    pub store: StoreConfig,

    /// Hard deadline for any single oracle call, in seconds.
    pub timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            telegram: TelegramConfig::new(),
            gemini: GeminiConfig::new(),
            speech: SpeechConfig::new(),
            store: StoreConfig::new(),

            timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
