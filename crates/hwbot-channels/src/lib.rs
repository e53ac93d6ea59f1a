//! Notification channels for hwbot.
//!
//! A channel is anything that can deliver an [`OutgoingMessage`] to a user.
//! Today that is Telegram only, behind the [`Channel`] trait so the watcher
//! never depends on a concrete transport.
//!
//! [`OutgoingMessage`]: hwbot_core::types::OutgoingMessage
//! [`Channel`]: hwbot_core::traits::Channel

pub mod telegram;

pub use telegram::TelegramChannel;
