/// Events flowing from the transport poller to the app event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A bot command such as `/start`.
    Command { chat_id: i64, name: String },
    /// A plain text message, candidate for word resolution.
    WordReceived { chat_id: i64, text: String },
}
