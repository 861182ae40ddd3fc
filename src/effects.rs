mod reveal;
mod schedule;
mod typing;

pub use reveal::{Observation, RatioSink, RevealController, RevealState, VisibilityObserver};
pub use schedule::{Fire, ScheduleError, Scheduler, Tick};
pub use typing::{
    Advance, TypingConfig, TypingController, TypingEffect, TypingFrame, TypingPhase, TERMINAL_TEXT,
};

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;

#[cfg(test)]
pub(crate) use schedule::ManualClock;

use std::sync::{Mutex, MutexGuard, PoisonError};

// Poisoning is ignored: state is consistent between every callback.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
