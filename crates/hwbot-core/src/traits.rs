//! Collaborator seams.
//!
//! The poll engine talks to the outside world only through these two traits,
//! which keeps the loop testable with in-memory fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::OutgoingMessage;

/// An outbound messaging channel.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Short channel name for logs ("telegram").
    fn name(&self) -> &str;

    /// Verify connectivity and identity once at startup.
    async fn connect(&mut self) -> Result<()>;

    /// Deliver one message. Errors surface as `HwBotError::Channel`.
    async fn send(&self, message: OutgoingMessage) -> Result<()>;
}

/// The remote homework status source.
///
/// Returns the parsed body as an untyped value; shape validation is a
/// separate step so the client stays a pure transport concern.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch status updates since `from_date` (epoch seconds).
    async fn fetch_updates(&self, from_date: i64) -> Result<serde_json::Value>;
}
