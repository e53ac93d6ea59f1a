//! The hwbot polling loop.
//!
//! Wires a [`HomeworkApi`] to a [`Channel`]: every cycle it fetches updates
//! since the cursor, turns the newest homework into a notification, and
//! delivers it with duplicate suppression. Cycle failures are reported to
//! the same chat rather than crashing the loop.
//!
//! [`HomeworkApi`]: hwbot_core::traits::HomeworkApi
//! [`Channel`]: hwbot_core::traits::Channel

pub mod engine;
pub mod notifier;
pub mod state;

pub use engine::Watcher;
pub use notifier::Notifier;
pub use state::PollState;
