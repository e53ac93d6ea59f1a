//! Shared message types crossing the channel seam.

/// A text message addressed to one chat, ready for a `Channel` to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Channel-specific chat identifier (Telegram accepts it as a string).
    pub chat_id: String,
    /// Plain message text, no markup.
    pub text: String,
}

impl OutgoingMessage {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
        }
    }
}
