//! hwbot error types.
//!
//! One enum for the whole workspace, one variant per failure concern.
//! The recoverable variants (Transport/Shape/Field) are the ones the poll
//! loop turns into chat notifications, so their messages are user-facing
//! and stay in Russian; variant construction sites own the wording.

use thiserror::Error;

/// All errors produced by hwbot crates.
#[derive(Debug, Error)]
pub enum HwBotError {
    /// Missing or invalid startup configuration. Fatal, never reaches the loop.
    #[error("config error: {0}")]
    Config(String),

    /// The homework API could not be reached or answered outside its contract
    /// (network failure, non-200 status, unparseable body).
    #[error("{0}")]
    Transport(String),

    /// The API response parsed but does not match the documented shape.
    #[error("{0}")]
    Shape(String),

    /// A homework record is missing a required field or carries an unknown
    /// status.
    #[error("{0}")]
    Field(String),

    /// Message delivery through a channel failed. Logged by the notifier,
    /// never escalated past it.
    #[error("channel error: {0}")]
    Channel(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across all hwbot crates.
pub type Result<T> = std::result::Result<T, HwBotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_variants_display_their_message_verbatim() {
        let err = HwBotError::Transport("Код ответа не соответствует ожиданиям. Код: 500".into());
        assert_eq!(
            err.to_string(),
            "Код ответа не соответствует ожиданиям. Код: 500"
        );

        let err = HwBotError::Field("Некорректный статус домашки: archived".into());
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/a/real/path")?)
        }
        assert!(matches!(read(), Err(HwBotError::Io(_))));
    }
}
