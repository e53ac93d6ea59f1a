//! Outbound notification delivery with duplicate suppression.

use hwbot_core::traits::Channel;
use hwbot_core::types::OutgoingMessage;

use crate::state::PollState;

/// Sends texts to one chat, dropping consecutive repeats.
///
/// A delivery failure is logged and swallowed. The failed text is not
/// recorded in the state, so the same text goes out again next cycle
/// instead of being silently lost.
pub struct Notifier<C> {
    channel: C,
    chat_id: String,
}

impl<C: Channel> Notifier<C> {
    pub fn new(channel: C, chat_id: impl Into<String>) -> Self {
        Self {
            channel,
            chat_id: chat_id.into(),
        }
    }

    pub async fn notify(&self, state: &mut PollState, text: &str) {
        if state.last_message() == Some(text) {
            tracing::debug!("suppressing repeated notification: {text}");
            return;
        }

        let message = OutgoingMessage::new(&self.chat_id, text);
        match self.channel.send(message).await {
            Ok(()) => {
                tracing::debug!("notification delivered via {}: {text}", self.channel.name());
                state.remember(text);
            }
            Err(e) => {
                tracing::error!(
                    "failed to deliver notification via {}: {e}",
                    self.channel.name()
                );
            }
        }
    }
}
