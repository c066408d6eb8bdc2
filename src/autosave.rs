//! Debounced auto-save.
//!
//! Every content change pushes the deadline out by the configured delay; the
//! callback runs once the content has been quiet that long. The callback is a
//! slot so a persistence collaborator can be plugged in without touching the
//! debounce logic.

use std::fmt;

use log::debug;
use web_time::{Duration, Instant};

pub const DEFAULT_AUTO_SAVE_DELAY: Duration = Duration::from_secs(30);

/// Coalesces a burst of events into one deadline.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restarts the quiet period and returns the new deadline.
    pub fn touch(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the pending deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

pub type SaveCallback = Box<dyn FnMut()>;

pub struct AutoSave {
    debouncer: Debouncer,
    callback: SaveCallback,
}

impl AutoSave {
    /// Starts with a callback that only logs.
    pub fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            callback: Box::new(|| debug!("content changed; auto-save could be triggered")),
        }
    }

    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Box::new(callback);
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    pub fn content_changed(&mut self, now: Instant) -> Instant {
        self.debouncer.touch(now)
    }

    /// Runs the callback if the quiet period is over.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.debouncer.take_due(now) {
            (self.callback)();
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl fmt::Debug for AutoSave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoSave")
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}
