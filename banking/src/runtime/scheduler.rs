use crate::routes::Route;
use std::time::Duration;
use tracing::info;

/// Navigation waiting for its due time. Times are offsets on whatever
/// monotonic clock the caller polls with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRedirect {
    pub target: Route,
    pub due: Duration,
}

impl PendingRedirect {
    pub fn remaining(&self, now: Duration) -> Duration {
        self.due.saturating_sub(now)
    }
}

/// One-shot redirect scheduled after a flow completes.
#[derive(Debug, Clone, Default)]
pub struct RedirectTimer {
    pending: Option<PendingRedirect>,
}

impl RedirectTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `target` for `now + delay`, replacing any pending redirect.
    pub fn schedule(&mut self, target: Route, delay: Duration, now: Duration) {
        info!(target = %target.path(), delay_ms = delay.as_millis() as u64, "redirect scheduled");
        self.pending = Some(PendingRedirect { target, due: now + delay });
    }

    pub fn pending(&self) -> Option<&PendingRedirect> {
        self.pending.as_ref()
    }

    /// Drops the pending redirect if it targets `target`.
    pub fn cancel(&mut self, target: &Route) -> bool {
        if self.pending.as_ref().map_or(false, |redirect| &redirect.target == target) {
            info!(target = %target.path(), "redirect cancelled");
            self.pending = None;
            return true;
        }
        false
    }

    /// Returns the target once its due time has passed, then forgets it.
    pub fn poll(&mut self, now: Duration) -> Option<Route> {
        let due = self.pending.as_ref()?.due;
        if now < due {
            return None;
        }
        self.pending.take().map(|redirect| redirect.target)
    }
}
