use std::time::Duration;

use mufradat_core::generate::{Generator, empty_analysis};
use serde_json::{Value, json};

use crate::GenerateError;
use crate::prompt;

#[derive(Debug, Clone)]
pub struct GeminiOptions {
    pub api_key: String,
    pub base_url: String,
    /// Model used for the base-form (normalization) contract.
    pub base_form_model: String,
    /// Model used for the full analysis contract.
    pub analysis_model: String,
    /// Hard per-call deadline; a slow oracle is treated the same as an
    /// empty one.
    pub timeout: Duration,
}

/// Completion-oracle adapter over the Gemini `generateContent` API.
///
/// Stateless request/response; both [`Generator`] contracts degrade to
/// harmless fallbacks on any failure and never retry.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    options: GeminiOptions,
}

impl GeminiClient {
    pub fn new(options: GeminiOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    /// One prompt in, trimmed response text out.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        if self.options.api_key.is_empty() {
            return Err(GenerateError::Authentication);
        }

        let request = async {
            let url = format!(
                "{}/v1beta/models/{}:generateContent",
                self.options.base_url.trim_end_matches('/'),
                model
            );
            let body = json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            });

            let response = self
                .http
                .post(&url)
                .header("x-goog-api-key", &self.options.api_key)
                .json(&body)
                .send()
                .await?;

            match response.status().as_u16() {
                429 => return Err(GenerateError::RateLimitExceeded),
                401 | 403 => return Err(GenerateError::Authentication),
                status if !(200..300).contains(&status) => {
                    return Err(GenerateError::ApiError(format!("HTTP {status}")));
                }
                _ => {}
            }

            let payload: Value = response.json().await?;
            Ok(extract_text(&payload).unwrap_or_default().trim().to_string())
        };

        match tokio::time::timeout(self.options.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(GenerateError::Timeout(self.options.timeout)),
        }
    }
}

/// First candidate's first text part, if any.
fn extract_text(payload: &Value) -> Option<&str> {
    payload["candidates"][0]["content"]["parts"][0]["text"].as_str()
}

#[async_trait::async_trait]
impl Generator for GeminiClient {
    async fn base_form(&self, word: &str) -> String {
        match self.complete(&self.options.base_form_model, &prompt::base_form(word)).await {
            Ok(text) => match text.split_whitespace().next() {
                Some(token) => token.to_string(),
                None => {
                    tracing::warn!(word, "empty base-form response, passing word through");
                    word.to_string()
                }
            },
            Err(error) => {
                tracing::warn!(word, %error, "base-form generation failed, passing word through");
                word.to_string()
            }
        }
    }

    async fn analyze(&self, word: &str) -> String {
        match self.complete(&self.options.analysis_model, &prompt::analysis(word)).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!(word, "empty analysis response, filling with sentinel");
                empty_analysis()
            }
            Err(error) => {
                tracing::warn!(word, %error, "analysis generation failed, filling with sentinel");
                empty_analysis()
            }
        }
    }
}
