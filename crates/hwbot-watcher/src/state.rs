//! Mutable polling state carried across cycles.

/// Cursor plus last-notification memory for one watcher run.
///
/// The cursor is the `from_date` sent to the homework API; it only moves
/// forward. `last_message` backs the duplicate suppression in the notifier
/// and is updated only when a message was actually delivered.
#[derive(Debug, Default)]
pub struct PollState {
    cursor: i64,
    last_message: Option<String>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_message: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Move the cursor forward. A timestamp behind the current cursor is
    /// ignored, so a stale server clock cannot make the bot re-fetch and
    /// re-announce old homeworks.
    pub fn advance(&mut self, to: i64) {
        self.cursor = self.cursor.max(to);
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Record `text` as the most recent delivered notification.
    pub fn remember(&mut self, text: &str) {
        self.last_message = Some(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = PollState::new(1700000000);
        assert_eq!(state.cursor(), 1700000000);
        assert_eq!(state.last_message(), None);
    }

    #[test]
    fn test_advance_moves_forward() {
        let mut state = PollState::new(100);
        state.advance(200);
        assert_eq!(state.cursor(), 200);
    }

    #[test]
    fn test_advance_never_moves_backward() {
        let mut state = PollState::new(200);
        state.advance(100);
        assert_eq!(state.cursor(), 200);
        state.advance(200);
        assert_eq!(state.cursor(), 200);
    }

    #[test]
    fn test_remember() {
        let mut state = PollState::default();
        state.remember("первое сообщение");
        assert_eq!(state.last_message(), Some("первое сообщение"));
        state.remember("второе сообщение");
        assert_eq!(state.last_message(), Some("второе сообщение"));
    }
}
