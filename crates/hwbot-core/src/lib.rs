//! # hwbot Core
//! Shared configuration, errors, collaborator traits, and message types.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{Credentials, HwBotConfig, StartFrom};
pub use error::{HwBotError, Result};
