//! The polling loop.
//!
//! One cycle walks `FETCHING -> VALIDATING -> RENDERING -> (UNCHANGED |
//! NOTIFYING)`, then the cursor advances and the loop sleeps. A failed cycle
//! leaves the cursor where it was, reports the failure, and sleeps the same
//! fixed interval -- there is no backoff and no retry cap.

use chrono::Utc;
use std::time::Duration;

use crate::api::{validate_response, StatusSource};
use crate::error::PollError;
use crate::status::{render_status, HomeworkRecord};
use crate::telegram::Notifier;

/// Result of one successful cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was delivered to the channel.
    Notified(String),
    /// Nothing new: empty window, or same message as last time.
    Unchanged,
}

/// Polls a status source and forwards changes to a notifier.
///
/// All mutable state lives here: the last delivered message and the
/// timestamp cursor bounding the next fetch window.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    last_message: String,
    cursor: i64,
    interval: Duration,
}

impl<S: StatusSource, N: Notifier> Poller<S, N> {
    pub fn new(source: S, notifier: N, lookback: chrono::Duration, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            last_message: String::new(),
            cursor: (Utc::now() - lookback).timestamp(),
            interval,
        }
    }

    /// Lower bound of the next fetch window, Unix seconds.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// The most recently delivered message, empty before the first send.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Execute one fetch-validate-render-notify cycle.
    ///
    /// When several records arrive in one window, only the last one is
    /// considered for change detection. The cursor advances to "now" only
    /// when the whole cycle succeeded, so a failed window is retried.
    ///
    /// # Errors
    ///
    /// Any step failing aborts the cycle with the cursor untouched.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, PollError> {
        let raw = self.source.fetch(self.cursor)?;
        let homeworks = validate_response(&raw)?;

        let mut latest = None;
        for value in homeworks {
            let record = HomeworkRecord::from_value(value)?;
            latest = Some(render_status(&record)?);
        }

        let outcome = match latest {
            Some(message) if message != self.last_message => {
                self.notifier.send(&message)?;
                self.last_message = message.clone();
                CycleOutcome::Notified(message)
            }
            _ => CycleOutcome::Unchanged,
        };

        self.cursor = Utc::now().timestamp();
        Ok(outcome)
    }

    /// Report a failed cycle: log it and attempt a best-effort notification.
    ///
    /// A failure of the notification itself is logged and swallowed -- it
    /// must not take the loop down.
    fn report_failure(&self, error: &PollError) {
        tracing::error!("poll cycle failed: {error}");
        let text = format!("Сбой в работе программы: {error}");
        if let Err(send_error) = self.notifier.send(&text) {
            tracing::warn!("failure notification not delivered: {send_error}");
        }
    }

    /// Run cycles forever, sleeping the fixed interval between them.
    pub fn run(&mut self) -> ! {
        loop {
            match self.run_cycle() {
                Ok(CycleOutcome::Notified(message)) => {
                    tracing::info!("status change delivered: {message}");
                }
                Ok(CycleOutcome::Unchanged) => {
                    tracing::debug!("no status change");
                }
                Err(error) => self.report_failure(&error),
            }
            std::thread::sleep(self.interval);
        }
    }
}
