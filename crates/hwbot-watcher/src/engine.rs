//! The polling engine: fetch, validate, parse, notify, advance.

use std::time::Duration;

use hwbot_core::error::Result;
use hwbot_core::traits::{Channel, HomeworkApi};
use hwbot_practicum::response::validate;
use hwbot_practicum::status::parse_status;

use crate::notifier::Notifier;
use crate::state::PollState;

/// Polls a homework API and forwards status changes to a channel.
///
/// One cycle per interval. Any failure inside a cycle is turned into a
/// chat alert instead of tearing the loop down, and the cursor stays put
/// so the failed window is re-fetched next time.
pub struct Watcher<A, C> {
    api: A,
    notifier: Notifier<C>,
    state: PollState,
    interval: Duration,
}

impl<A, C> Watcher<A, C>
where
    A: HomeworkApi,
    C: Channel,
{
    pub fn new(
        api: A,
        channel: C,
        chat_id: impl Into<String>,
        interval: Duration,
        start_from: i64,
    ) -> Self {
        Self {
            api,
            notifier: Notifier::new(channel, chat_id),
            state: PollState::new(start_from),
            interval,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Poll forever at the configured interval.
    pub async fn run(&mut self) {
        tracing::info!(
            "📡 watcher started: polling every {}s, from_date {}",
            self.interval.as_secs(),
            self.state.cursor()
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One cycle with the error boundary: any failure is logged and
    /// mirrored to the chat so the user learns about breakage too.
    pub async fn run_cycle(&mut self) {
        if let Err(err) = self.poll_once().await {
            tracing::error!("poll cycle failed: {err}");
            let text = format!("Сбой в работе программы: {err}");
            self.notifier.notify(&mut self.state, &text).await;
        }
    }

    /// Fetch, validate, report the newest homework, then move the cursor.
    ///
    /// The cursor advances only on a fully successful pass, so any error
    /// here leaves the window to be retried on the next cycle.
    async fn poll_once(&mut self) -> Result<()> {
        let raw = self.api.fetch_updates(self.state.cursor()).await?;
        let response = validate(&raw)?;

        // The API returns homeworks newest first; only the newest one
        // can have changed since the cursor.
        match response.homeworks.first() {
            Some(record) => {
                let text = parse_status(record)?;
                tracing::info!("status update: {text}");
                self.notifier.notify(&mut self.state, &text).await;
            }
            None => {
                tracing::debug!("no homework updates since {}", self.state.cursor());
            }
        }

        self.state.advance(response.current_date);
        Ok(())
    }
}
