//! Speech synthesis client: word in, mp3 bytes out.
//!
//! Pure request/response over the translate TTS endpoint; no state and
//! no retention of audio — the caller owns the bytes and any temporary
//! file it writes them to.

use std::time::Duration;

pub const DEFAULT_LANGUAGE: &str = "ar";

#[derive(Clone)]
pub struct SpeechClient {
    http: reqwest::Client,
    base_url: String,
    /// Hard per-call deadline; a hung TTS endpoint must never stall the
    /// caller's event loop.
    timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("TTS endpoint error: {0}")]
    ApiError(String),

    #[error("synthesis timed out after {0:?}")]
    Timeout(Duration),
}

impl SpeechClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    /// Synthesize `text` in `lang` (normally [`DEFAULT_LANGUAGE`]).
    pub async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SpeechError> {
        let request = async {
            let response = self
                .http
                .get(&self.base_url)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", lang),
                    ("q", text),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(SpeechError::ApiError(format!("HTTP {}", response.status())));
            }

            let bytes = response.bytes().await?;
            tracing::debug!(text, bytes = bytes.len(), "synthesized pronunciation");
            Ok(bytes.to_vec())
        };

        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(SpeechError::Timeout(self.timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unresponsive_endpoint_times_out_instead_of_hanging() {
        // A listener that accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = SpeechClient::new(
            format!("http://{addr}/translate_tts"),
            Duration::from_millis(50),
        );

        let error = client.synthesize("كتاب", DEFAULT_LANGUAGE).await.unwrap_err();
        assert!(matches!(error, SpeechError::Timeout(_)), "got {error}");
        drop(listener);
    }
}
