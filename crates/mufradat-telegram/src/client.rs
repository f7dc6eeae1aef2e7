use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use crate::{Message, Update};

/// Thin Bot API client: long-poll updates in, replies out. All domain
/// logic lives upstream; this only speaks the wire protocol.
#[derive(Clone)]
pub struct BotClient {
    base_url: String,
    client: reqwest::Client,
}

impl BotClient {
    pub fn new(api_url: &str, token: &str) -> Self {
        Self {
            base_url: format!("{}/bot{token}", api_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    /// Long-poll for updates after `offset`. Blocks server-side for up
    /// to `timeout_secs`, so the caller's own timeout must exceed it.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let params = json!({
            "offset": offset,
            "timeout": timeout_secs,
            "allowed_updates": ["message"],
        });

        let response: ApiResponse<Vec<Update>> = self.invoke("getUpdates", params).await?;
        response.into_result()
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message> {
        let params = json!({
            "chat_id": chat_id,
            "text": text,
        });

        let response: ApiResponse<Message> = self.invoke("sendMessage", params).await?;
        response.into_result()
    }

    /// Upload an mp3 pronunciation. The bytes are consumed; nothing is
    /// retained client-side.
    pub async fn send_audio(&self, chat_id: i64, file_name: &str, audio: Vec<u8>) -> Result<Message> {
        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(file_name.to_string())
            .mime_str("audio/mpeg")
            .context("invalid audio mime type")?;
        let form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .part("audio", part);

        let response = self
            .client
            .post(format!("{}/sendAudio", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("failed to send audio to Bot API")?;

        response
            .json::<ApiResponse<Message>>()
            .await
            .context("failed to parse sendAudio response")?
            .into_result()
    }

    async fn invoke<T>(&self, method: &str, params: serde_json::Value) -> Result<ApiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(format!("{}/{method}", self.base_url))
            .json(&params)
            .send()
            .await
            .with_context(|| format!("failed to call Bot API method {method}"))?;

        response
            .json::<ApiResponse<T>>()
            .await
            .with_context(|| format!("failed to parse Bot API response for {method}"))
    }
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T> {
        if !self.ok {
            anyhow::bail!(
                "Bot API error: {}",
                self.description.unwrap_or_else(|| "unknown".to_string())
            );
        }

        self.result.context("Bot API returned ok with null result")
    }
}
