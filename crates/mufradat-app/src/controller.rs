use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use mufradat_core::pipeline::Resolver;
use mufradat_core::types::AppEvent;
use mufradat_speech::SpeechClient;
use mufradat_telegram::BotClient;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::poller::poll_updates;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub transport_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            transport_to_app: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        resolver: Arc<Resolver>,
        telegram: BotClient,
        speech: SpeechClient,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.transport_to_app.1.clone(),
            resolver,
            telegram.clone(),
            speech,
        ));

        // Update poller
        tasks.spawn(poll_updates(
            self.state.clone(),
            telegram,
            self.cancel_token.child_token(),
            self.channels.transport_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
