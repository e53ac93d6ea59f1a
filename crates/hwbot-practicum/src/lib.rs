//! # hwbot Practicum
//! Client and parsing pipeline for the Yandex Practicum homework API:
//! fetch (untyped) -> validate shape (typed) -> parse status (message text).

pub mod client;
pub mod response;
pub mod status;
pub mod verdicts;

pub use client::PracticumClient;
pub use response::{ApiResponse, HomeworkRecord, validate};
pub use status::parse_status;
pub use verdicts::{HOMEWORK_VERDICTS, verdict_for};
