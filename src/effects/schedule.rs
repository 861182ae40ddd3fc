use std::time::Duration;

use thiserror::Error;

pub type Tick = Box<dyn Fn() + Send + Sync>;
pub type Fire = Box<dyn FnOnce() + Send>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Timer couldn't be registered: {0}")]
    Unavailable(String),
}

/// Source of repeating and one-shot timers.
///
/// Callbacks are never run from inside `interval` or `timeout`; they fire
/// later from the event loop (or from `ManualClock::advance` in tests).
pub trait Scheduler: Send + Sync + 'static {
    type Handle: Send + 'static;

    fn interval(&self, period: Duration, tick: Tick) -> Result<Self::Handle, ScheduleError>;

    fn timeout(&self, delay: Duration, fire: Fire) -> Result<Self::Handle, ScheduleError>;

    fn cancel(&self, handle: Self::Handle);
}

#[cfg(test)]
pub use manual::ManualClock;
