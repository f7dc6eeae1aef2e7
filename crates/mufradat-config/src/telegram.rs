use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token, without the "bot" URL prefix
    pub token: String,
    /// Bot API base URL
    pub api_url: String,
    /// Server-side long-poll hold time for getUpdates, in seconds
    pub poll_timeout_seconds: u64,
}

impl TelegramConfig {
    pub fn new() -> Self {
        let token = env::var("TOKEN").unwrap_or_default();
        let api_url =
            env::var("TELEGRAM_API_URL").unwrap_or_else(|_| "https://api.telegram.org".to_string());
        let poll_timeout_seconds = env::var("POLL_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(25);

        Self {
            token,
            api_url,
            poll_timeout_seconds,
        }
    }
}
