use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use super::{lock, DEFAULT_REVEAL_THRESHOLD};

/// Receives intersection ratios (0.0..=1.0) for the observed region.
pub type RatioSink = Box<dyn FnMut(f64) + Send + Sync>;

/// A live subscription returned by a [`VisibilityObserver`].
pub struct Observation {
    cancel: Box<dyn FnOnce() + Send>,
}

impl Observation {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(self) {
        (self.cancel)()
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observation")
    }
}

/// Capability to watch how much of a region is inside the viewport.
///
/// Returns `None` when the platform can't observe visibility at all.
pub trait VisibilityObserver {
    fn observe(&self, threshold: f64, on_ratio: RatioSink) -> Option<Observation>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn has_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection sample. Returns `true` only for the sample that
    /// reveals; once revealed nothing flips it back.
    pub fn sample(&mut self, ratio: f64) -> bool {
        // a zero ratio never counts, even with a zero threshold
        if self.revealed || ratio <= 0.0 || ratio < self.threshold || ratio.is_nan() {
            return false;
        }
        self.revealed = true;
        true
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

struct RevealShared {
    state: RevealState,
    observation: Option<Observation>,
    on_reveal: Option<Box<dyn FnOnce() + Send>>,
    disposed: bool,
}

impl Drop for RevealShared {
    fn drop(&mut self) {
        if let Some(observation) = self.observation.take() {
            observation.cancel();
        }
    }
}

/// One-shot reveal of a region the first time it is sufficiently visible.
#[derive(Clone)]
pub struct RevealController {
    shared: Arc<Mutex<RevealShared>>,
}

impl RevealController {
    pub fn new(threshold: f64) -> Self {
        Self {
            shared: Arc::new(Mutex::new(RevealShared {
                state: RevealState::new(threshold),
                observation: None,
                on_reveal: None,
                disposed: false,
            })),
        }
    }

    /// Subscribes through `observer`. `on_reveal` runs at most once.
    pub fn start<O>(&self, observer: &O, on_reveal: impl FnOnce() + Send + 'static)
    where
        O: VisibilityObserver + ?Sized,
    {
        let threshold = {
            let mut shared = lock(&self.shared);
            if shared.disposed || shared.state.has_revealed() || shared.observation.is_some() {
                return;
            }
            shared.on_reveal = Some(Box::new(on_reveal));
            shared.state.threshold()
        };

        let weak = Arc::downgrade(&self.shared);
        let observation = observer.observe(
            threshold,
            Box::new(move |ratio| Self::handle_sample(&weak, ratio)),
        );
        let Some(observation) = observation else {
            log::debug!("visibility observation unavailable, region stays unrevealed");
            return;
        };

        let mut shared = lock(&self.shared);
        if shared.disposed || shared.state.has_revealed() {
            // revealed synchronously while subscribing, or torn down meanwhile
            drop(shared);
            observation.cancel();
        } else {
            shared.observation = Some(observation);
        }
    }

    fn handle_sample(weak: &Weak<Mutex<RevealShared>>, ratio: f64) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let (observation, on_reveal) = {
            let mut shared = lock(&shared);
            if shared.disposed || !shared.state.sample(ratio) {
                return;
            }
            (shared.observation.take(), shared.on_reveal.take())
        };
        if let Some(observation) = observation {
            observation.cancel();
        }
        if let Some(on_reveal) = on_reveal {
            on_reveal();
        }
    }

    pub fn has_revealed(&self) -> bool {
        lock(&self.shared).state.has_revealed()
    }

    pub fn is_observing(&self) -> bool {
        lock(&self.shared).observation.is_some()
    }

    /// Stops observing whether or not the region was revealed. Idempotent.
    pub fn dispose(&self) {
        let observation = {
            let mut shared = lock(&self.shared);
            shared.disposed = true;
            shared.on_reveal = None;
            shared.observation.take()
        };
        if let Some(observation) = observation {
            observation.cancel();
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct ScriptedObserver {
        unsupported: bool,
        // delivered from inside `observe`, like an already-visible region
        initial: Option<f64>,
        sink: Mutex<Option<RatioSink>>,
        threshold: Mutex<Option<f64>>,
        cancelled: Arc<AtomicUsize>,
    }

    impl ScriptedObserver {
        // keeps delivering after cancel, so the controller has to ignore it
        fn emit(&self, ratio: f64) {
            if let Some(sink) = self.sink.lock().unwrap().as_mut() {
                sink(ratio);
            }
        }

        fn cancelled(&self) -> usize {
            self.cancelled.load(Ordering::SeqCst)
        }
    }

    impl VisibilityObserver for ScriptedObserver {
        fn observe(&self, threshold: f64, mut on_ratio: RatioSink) -> Option<Observation> {
            if self.unsupported {
                return None;
            }
            *self.threshold.lock().unwrap() = Some(threshold);
            if let Some(ratio) = self.initial {
                on_ratio(ratio);
            }
            *self.sink.lock().unwrap() = Some(on_ratio);
            let cancelled = self.cancelled.clone();
            Some(Observation::new(move || {
                cancelled.fetch_add(1, Ordering::SeqCst);
            }))
        }
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let observer = ScriptedObserver::default();
        let controller = RevealController::default();
        let (reveals, on_reveal) = counter();
        controller.start(&observer, on_reveal);
        assert!(controller.is_observing());
        assert_eq!(*observer.threshold.lock().unwrap(), Some(0.15));

        observer.emit(0.5);
        assert!(controller.has_revealed());
        assert!(!controller.is_observing());
        assert_eq!(observer.cancelled(), 1);

        // scrolled away and back
        observer.emit(0.0);
        observer.emit(0.9);
        assert!(controller.has_revealed());
        assert_eq!(reveals.load(Ordering::SeqCst), 1);
        assert_eq!(observer.cancelled(), 1);
    }

    #[test]
    fn test_threshold_gating() {
        let observer = ScriptedObserver::default();
        let controller = RevealController::new(0.3);
        let (reveals, on_reveal) = counter();
        controller.start(&observer, on_reveal);

        for ratio in [0.0, 0.1, 0.29, 0.2999] {
            observer.emit(ratio);
            assert!(!controller.has_revealed(), "revealed at {ratio}");
        }
        observer.emit(0.3);
        assert!(controller.has_revealed());
        assert_eq!(reveals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_revealed_never_reverts_for_any_sequence() {
        let sequences: [&[f64]; 4] = [
            &[0.2, 0.0, 0.0],
            &[0.0, 1.0, 0.01, f64::NAN],
            &[0.15, 0.14, 0.0, 0.5],
            &[0.01, 0.05, 0.16, 0.0],
        ];
        for seq in sequences {
            let mut state = RevealState::default();
            let mut seen = false;
            let mut transitions = 0;
            for &ratio in seq {
                if state.sample(ratio) {
                    transitions += 1;
                }
                if seen {
                    assert!(state.has_revealed());
                }
                seen |= state.has_revealed();
            }
            assert_eq!(transitions, 1, "sequence {seq:?}");
        }
    }

    #[test]
    fn test_threshold_normalization() {
        assert_eq!(RevealState::new(1.5).threshold(), 1.0);
        assert_eq!(RevealState::new(-0.2).threshold(), 0.0);
        assert_eq!(RevealState::new(f64::NAN).threshold(), 0.15);
        assert_eq!(RevealState::new(f64::INFINITY).threshold(), 0.15);

        let mut zero = RevealState::new(0.0);
        assert!(!zero.sample(0.0));
        assert!(zero.sample(0.001));
    }

    #[test]
    fn test_dispose_before_reveal_cancels() {
        let observer = ScriptedObserver::default();
        let controller = RevealController::default();
        let (reveals, on_reveal) = counter();
        controller.start(&observer, on_reveal);
        observer.emit(0.05);

        controller.dispose();
        assert_eq!(observer.cancelled(), 1);
        assert!(!controller.is_observing());

        observer.emit(1.0);
        assert!(!controller.has_revealed());
        assert_eq!(reveals.load(Ordering::SeqCst), 0);

        // second dispose is a no-op
        controller.dispose();
        assert_eq!(observer.cancelled(), 1);
    }

    #[test]
    fn test_unsupported_observer_never_reveals() {
        let observer = ScriptedObserver {
            unsupported: true,
            ..Default::default()
        };
        let controller = RevealController::default();
        let (reveals, on_reveal) = counter();
        controller.start(&observer, on_reveal);
        assert!(!controller.is_observing());
        assert!(!controller.has_revealed());
        controller.dispose();
        assert_eq!(reveals.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_visible_on_subscribe_cancels_returned_observation() {
        let observer = ScriptedObserver {
            initial: Some(1.0),
            ..Default::default()
        };
        let controller = RevealController::default();
        let (reveals, on_reveal) = counter();
        controller.start(&observer, on_reveal);
        assert!(controller.has_revealed());
        assert!(!controller.is_observing());
        assert_eq!(observer.cancelled(), 1);
        assert_eq!(reveals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropping_controller_releases_observation() {
        let observer = ScriptedObserver::default();
        let controller = RevealController::default();
        controller.start(&observer, || {});
        drop(controller);
        assert_eq!(observer.cancelled(), 1);
        // late sample after teardown is harmless
        observer.emit(1.0);
    }
}
