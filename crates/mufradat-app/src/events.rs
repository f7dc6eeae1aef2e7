use std::sync::Arc;

use kanal::AsyncReceiver;
use mufradat_core::normalize::is_arabic_word;
use mufradat_core::pipeline::Resolver;
use mufradat_core::types::AppEvent;
use mufradat_speech::SpeechClient;
use mufradat_telegram::BotClient;

use crate::messages;
use crate::report;
use crate::state::AppState;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<AppEvent>,
    resolver: Arc<Resolver>,
    telegram: BotClient,
    speech: SpeechClient,
) -> anyhow::Result<()> {
    let language = {
        let config = state.config.read().await;
        config.speech.language.clone()
    };

    tracing::info!("event loop started, waiting for messages");
    loop {
        let event = event_rx.recv().await?;
        // One bad message must never take the bot down.
        handle_event(&resolver, &telegram, &speech, &language, event).await;
    }
}

async fn handle_event(
    resolver: &Resolver,
    telegram: &BotClient,
    speech: &SpeechClient,
    language: &str,
    event: AppEvent,
) {
    match event {
        AppEvent::Command { chat_id, name } => {
            if name == "start" {
                if let Err(e) = telegram.send_message(chat_id, messages::GREETING).await {
                    tracing::error!("failed to send greeting: {e}");
                }
            } else {
                tracing::debug!(command = %name, "ignoring unknown command");
            }
        }
        AppEvent::WordReceived { chat_id, text } => {
            handle_word(resolver, telegram, speech, language, chat_id, &text).await;
        }
    }
}

/// Validation gate plus the resolution round trip. Invalid input is
/// rejected here and never reaches the pipeline.
async fn handle_word(
    resolver: &Resolver,
    telegram: &BotClient,
    speech: &SpeechClient,
    language: &str,
    chat_id: i64,
    text: &str,
) {
    let word = text.trim();

    if !is_arabic_word(word) {
        tracing::debug!(input = %word, "rejected non-Arabic input");
        if let Err(e) = telegram.send_message(chat_id, messages::REJECTION).await {
            tracing::error!("failed to send rejection notice: {e}");
        }
        return;
    }

    let record = match resolver.resolve(word).await {
        Ok(record) => record,
        Err(error) => {
            tracing::error!(word, %error, "resolution failed");
            if let Err(e) = telegram.send_message(chat_id, messages::FAILURE).await {
                tracing::error!("failed to send failure notice: {e}");
            }
            return;
        }
    };

    // Pronunciation and text report are independent best-effort sends;
    // one failing must not block the other. The audio speaks the word
    // as the user typed it, not the normalized key.
    let audio_reply = async {
        match speech.synthesize(word, language).await {
            Ok(bytes) => {
                if let Err(e) = telegram.send_audio(chat_id, &format!("{word}.mp3"), bytes).await {
                    tracing::error!(word, "failed to send pronunciation: {e}");
                }
            }
            Err(e) => tracing::error!(word, "speech synthesis failed: {e}"),
        }
    };
    let text_reply = async {
        let rendered = report::format_report(&record);
        if let Err(e) = telegram.send_message(chat_id, &rendered).await {
            tracing::error!(word, "failed to send analysis report: {e}");
        }
    };
    tokio::join!(audio_reply, text_reply);
}
