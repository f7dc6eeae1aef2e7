mod client;
mod prompt;

pub use client::{GeminiClient, GeminiOptions};

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("authentication error")]
    Authentication,

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
}
