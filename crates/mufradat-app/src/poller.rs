use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use mufradat_core::types::AppEvent;
use mufradat_telegram::BotClient;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Long-poll the Bot API and feed inbound messages to the event loop.
pub async fn poll_updates(
    state: Arc<AppState>,
    telegram: BotClient,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let poll_timeout = {
        let config = state.config.read().await;
        config.telegram.poll_timeout_seconds
    };

    tracing::info!("update poller started");
    let mut offset = 0i64;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("update poller stopping");
                return Ok(());
            }
            result = telegram.get_updates(offset, poll_timeout) => {
                match result {
                    Ok(updates) => {
                        for update in updates {
                            offset = offset.max(update.update_id + 1);

                            let Some(message) = update.message else { continue };
                            let Some(text) = message.text else { continue };

                            let Some(event) = classify(message.chat.id, &text) else { continue };
                            event_tx.send(event).await?;
                        }
                    }
                    Err(e) => {
                        tracing::error!("getUpdates failed: {e}");
                        tokio::time::sleep(Duration::from_secs(3)).await;
                    }
                }
            }
        }
    }
}

/// Split inbound text into bot commands and word candidates. Empty
/// messages produce no event at all.
pub(crate) fn classify(chat_id: i64, text: &str) -> Option<AppEvent> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(command) = text.strip_prefix('/') {
        // Clients may address the bot as "/start@botname".
        let name = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        return Some(AppEvent::Command { chat_id, name });
    }

    Some(AppEvent::WordReceived {
        chat_id,
        text: text.to_string(),
    })
}
