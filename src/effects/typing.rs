use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use super::{lock, Scheduler};

pub const TERMINAL_TEXT: &str = r#"console.log("Hello, World!");"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingConfig {
    pub text: String,
    pub char_interval: Duration,
    pub pause: Duration,
    pub cursor_blink: Duration,
}

impl TypingConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            text: TERMINAL_TEXT.to_string(),
            char_interval: Duration::from_millis(60),
            pause: Duration::from_millis(3000),
            cursor_blink: Duration::from_millis(530),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Typed,
    Completed,
    Ignored,
}

/// What the terminal renders: the visible prefix and the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub cursor_on: bool,
}

/// Typing -> Holding -> (restart) -> Typing, with lengths counted in chars.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    text: String,
    len: usize,
    visible: usize,
    cursor_on: bool,
    phase: TypingPhase,
}

impl TypingEffect {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            visible: 0,
            cursor_on: true,
            phase: Self::opening_phase(len),
        }
    }

    fn opening_phase(len: usize) -> TypingPhase {
        if len == 0 {
            TypingPhase::Holding
        } else {
            TypingPhase::Typing
        }
    }

    pub fn advance(&mut self) -> Advance {
        match self.phase {
            TypingPhase::Holding => Advance::Ignored,
            TypingPhase::Typing => {
                self.visible = (self.visible + 1).min(self.len);
                if self.visible == self.len {
                    self.phase = TypingPhase::Holding;
                    Advance::Completed
                } else {
                    Advance::Typed
                }
            }
        }
    }

    /// Clears the text and starts the next cycle.
    pub fn restart(&mut self) {
        self.visible = 0;
        self.phase = Self::opening_phase(self.len);
    }

    pub fn toggle_cursor(&mut self) -> bool {
        self.cursor_on = !self.cursor_on;
        self.cursor_on
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn visible_len(&self) -> usize {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor_on(&self) -> bool {
        self.cursor_on
    }

    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.visible) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn frame(&self) -> TypingFrame {
        TypingFrame {
            text: self.visible_text().to_string(),
            cursor_on: self.cursor_on,
        }
    }
}

type FrameSink = Arc<dyn Fn(TypingFrame) + Send + Sync>;

struct TypingShared<S: Scheduler> {
    scheduler: S,
    effect: TypingEffect,
    char_interval: Duration,
    pause: Duration,
    cursor_blink: Duration,
    char_timer: Option<S::Handle>,
    pause_timer: Option<S::Handle>,
    cursor_timer: Option<S::Handle>,
    on_frame: FrameSink,
    disposed: bool,
}

type SharedRef<S> = Arc<Mutex<TypingShared<S>>>;

/// Drives a [`TypingEffect`] from a [`Scheduler`]. Every timer is cancelled on
/// [`dispose`](Self::dispose) or drop; timer callbacks only hold weak
/// references, so nothing fires into a torn down controller.
pub struct TypingController<S: Scheduler> {
    shared: SharedRef<S>,
}

impl<S: Scheduler> TypingController<S> {
    pub fn start(
        scheduler: S,
        config: TypingConfig,
        on_frame: impl Fn(TypingFrame) + Send + Sync + 'static,
    ) -> Self {
        let on_frame: FrameSink = Arc::new(on_frame);
        let shared = Arc::new(Mutex::new(TypingShared {
            scheduler,
            effect: TypingEffect::new(config.text),
            char_interval: config.char_interval,
            pause: config.pause,
            cursor_blink: config.cursor_blink,
            char_timer: None,
            pause_timer: None,
            cursor_timer: None,
            on_frame: on_frame.clone(),
            disposed: false,
        }));

        let frame = {
            let mut state = lock(&shared);
            schedule_cycle(&shared, &mut *state);
            schedule_cursor(&shared, &mut *state);
            state.effect.frame()
        };
        on_frame(frame);

        Self { shared }
    }

    pub fn frame(&self) -> TypingFrame {
        lock(&self.shared).effect.frame()
    }

    pub fn phase(&self) -> TypingPhase {
        lock(&self.shared).effect.phase()
    }

    pub fn visible_len(&self) -> usize {
        lock(&self.shared).effect.visible_len()
    }

    pub fn is_disposed(&self) -> bool {
        lock(&self.shared).disposed
    }

    pub fn dispose(&self) {
        let mut state = lock(&self.shared);
        if state.disposed {
            return;
        }
        state.disposed = true;
        let timers = [
            state.char_timer.take(),
            state.pause_timer.take(),
            state.cursor_timer.take(),
        ];
        for handle in timers.into_iter().flatten() {
            state.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for TypingController<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule_cycle<S: Scheduler>(shared: &SharedRef<S>, state: &mut TypingShared<S>) {
    match state.effect.phase() {
        TypingPhase::Typing => schedule_typing(shared, state),
        TypingPhase::Holding => schedule_pause(shared, state),
    }
}

fn schedule_typing<S: Scheduler>(shared: &SharedRef<S>, state: &mut TypingShared<S>) {
    let weak = Arc::downgrade(shared);
    match state
        .scheduler
        .interval(state.char_interval, Box::new(move || on_char_tick(&weak)))
    {
        Ok(handle) => state.char_timer = Some(handle),
        Err(e) => log::warn!("typing stalled at {} chars: {e}", state.effect.visible_len()),
    }
}

fn schedule_pause<S: Scheduler>(shared: &SharedRef<S>, state: &mut TypingShared<S>) {
    let weak = Arc::downgrade(shared);
    match state
        .scheduler
        .timeout(state.pause, Box::new(move || on_pause_elapsed(&weak)))
    {
        Ok(handle) => state.pause_timer = Some(handle),
        Err(e) => log::warn!("typing hold never ends: {e}"),
    }
}

fn schedule_cursor<S: Scheduler>(shared: &SharedRef<S>, state: &mut TypingShared<S>) {
    let weak = Arc::downgrade(shared);
    match state
        .scheduler
        .interval(state.cursor_blink, Box::new(move || on_cursor_tick(&weak)))
    {
        Ok(handle) => state.cursor_timer = Some(handle),
        Err(e) => log::warn!("cursor won't blink: {e}"),
    }
}

// Runs `step` under the lock and emits the resulting frame after releasing it.
fn with_live<S, F>(weak: &Weak<Mutex<TypingShared<S>>>, step: F)
where
    S: Scheduler,
    F: FnOnce(&SharedRef<S>, &mut TypingShared<S>) -> bool,
{
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let (frame, on_frame) = {
        let mut state = lock(&shared);
        if state.disposed || !step(&shared, &mut *state) {
            return;
        }
        (state.effect.frame(), state.on_frame.clone())
    };
    on_frame(frame);
}

fn on_char_tick<S: Scheduler>(weak: &Weak<Mutex<TypingShared<S>>>) {
    with_live(weak, |shared, state| match state.effect.advance() {
        Advance::Ignored => false,
        Advance::Typed => true,
        Advance::Completed => {
            if let Some(handle) = state.char_timer.take() {
                state.scheduler.cancel(handle);
            }
            schedule_pause(shared, state);
            true
        }
    });
}

fn on_pause_elapsed<S: Scheduler>(weak: &Weak<Mutex<TypingShared<S>>>) {
    with_live(weak, |shared, state| {
        state.pause_timer = None;
        state.effect.restart();
        schedule_cycle(shared, state);
        true
    });
}

fn on_cursor_tick<S: Scheduler>(weak: &Weak<Mutex<TypingShared<S>>>) {
    with_live(weak, |_, state| {
        state.effect.toggle_cursor();
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::ManualClock;

    const THIRTY: &str = "abcdefghijklmnopqrstuvwxyz0123";

    fn recorder() -> (
        Arc<Mutex<Vec<TypingFrame>>>,
        impl Fn(TypingFrame) + Send + Sync + 'static,
    ) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let f = frames.clone();
        (frames, move |frame: TypingFrame| f.lock().unwrap().push(frame))
    }

    #[test]
    fn test_advance_is_monotonic_within_cycle() {
        let mut effect = TypingEffect::new(THIRTY);
        assert_eq!(effect.len(), 30);
        let mut prev = effect.visible_len();
        for _ in 0..29 {
            assert_eq!(effect.advance(), Advance::Typed);
            assert_eq!(effect.visible_len(), prev + 1);
            prev = effect.visible_len();
        }
        assert_eq!(effect.advance(), Advance::Completed);
        assert_eq!(effect.visible_len(), 30);
        assert_eq!(effect.phase(), TypingPhase::Holding);

        // extra ticks while holding never exceed the length
        assert_eq!(effect.advance(), Advance::Ignored);
        assert_eq!(effect.visible_len(), 30);
        assert_eq!(effect.visible_text(), THIRTY);

        effect.restart();
        assert_eq!(effect.visible_len(), 0);
        assert_eq!(effect.visible_text(), "");
        assert_eq!(effect.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_unicode_prefixes() {
        let mut effect = TypingEffect::new("olá ✓");
        assert_eq!(effect.len(), 5);
        let mut seen = Vec::new();
        while effect.advance() != Advance::Completed {
            seen.push(effect.visible_text().to_string());
        }
        seen.push(effect.visible_text().to_string());
        assert_eq!(seen, vec!["o", "ol", "olá", "olá ", "olá ✓"]);
    }

    #[test]
    fn test_end_to_end_cycle_timing() {
        let clock = ManualClock::new();
        let controller = TypingController::start(clock.clone(), TypingConfig::new(THIRTY), |_| {});
        assert_eq!(controller.visible_len(), 0);

        clock.advance_ms(30 * 60);
        assert_eq!(controller.visible_len(), 30);
        assert_eq!(controller.phase(), TypingPhase::Holding);

        clock.advance_ms(2999);
        assert_eq!(controller.visible_len(), 30);

        clock.advance_ms(1);
        assert_eq!(controller.visible_len(), 0);
        assert_eq!(controller.phase(), TypingPhase::Typing);

        clock.advance_ms(60);
        assert_eq!(controller.visible_len(), 1);
    }

    #[test]
    fn test_cycles_reproduce_identically() {
        let clock = ManualClock::new();
        let (frames, on_frame) = recorder();
        let config = TypingConfig::default();
        let cycle_ms = 29 * 60 + 3000;
        let _controller = TypingController::start(clock.clone(), config, on_frame);
        clock.advance_ms(2 * cycle_ms + 120);

        let mut texts: Vec<String> = frames
            .lock()
            .unwrap()
            .iter()
            .map(|f| f.text.clone())
            .collect();
        texts.dedup();

        let effect = TypingEffect::new(TERMINAL_TEXT);
        let expected: Vec<String> = (0..=effect.len())
            .map(|n| TERMINAL_TEXT.chars().take(n).collect())
            .collect();
        assert_eq!(expected.last().map(String::as_str), Some(TERMINAL_TEXT));
        assert_eq!(texts[..30], expected[..]);
        assert_eq!(texts[30..60], expected[..]);
        assert_eq!(texts[60..], ["".to_string(), "c".to_string(), "co".to_string()]);
    }

    #[test]
    fn test_cursor_blinks_during_hold() {
        let clock = ManualClock::new();
        let controller = TypingController::start(clock.clone(), TypingConfig::new(THIRTY), |_| {});
        assert!(controller.frame().cursor_on);

        clock.advance_ms(1800);
        assert_eq!(controller.phase(), TypingPhase::Holding);
        // toggled at 530, 1060, 1590
        assert!(!controller.frame().cursor_on);

        clock.advance_ms(320);
        assert_eq!(controller.phase(), TypingPhase::Holding);
        assert!(controller.frame().cursor_on);

        clock.advance_ms(530);
        assert_eq!(controller.phase(), TypingPhase::Holding);
        assert!(!controller.frame().cursor_on);
    }

    #[test]
    fn test_no_mutation_after_dispose() {
        let clock = ManualClock::new();
        let (frames, on_frame) = recorder();
        let controller = TypingController::start(clock.clone(), TypingConfig::new(THIRTY), on_frame);
        clock.advance_ms(1000);
        let before = controller.frame();
        let emitted = frames.lock().unwrap().len();

        controller.dispose();
        assert!(controller.is_disposed());
        assert_eq!(clock.pending(), 0);

        clock.advance_ms(60_000);
        assert_eq!(controller.frame(), before);
        assert_eq!(frames.lock().unwrap().len(), emitted);
    }

    #[test]
    fn test_dispose_during_hold_cancels_pause() {
        let clock = ManualClock::new();
        let controller = TypingController::start(clock.clone(), TypingConfig::new(THIRTY), |_| {});
        clock.advance_ms(1800);
        // pause timeout + cursor interval
        assert_eq!(clock.pending(), 2);
        drop(controller);
        assert_eq!(clock.pending(), 0);
        clock.advance_ms(10_000);
    }

    #[test]
    fn test_empty_text_just_holds() {
        let clock = ManualClock::new();
        let (frames, on_frame) = recorder();
        let controller = TypingController::start(clock.clone(), TypingConfig::new(""), on_frame);
        assert_eq!(controller.phase(), TypingPhase::Holding);
        clock.advance_ms(10_000);
        assert_eq!(controller.visible_len(), 0);
        assert!(frames.lock().unwrap().iter().all(|f| f.text.is_empty()));
    }

    #[test]
    fn test_unavailable_scheduler_freezes_first_frame() {
        let clock = ManualClock::unavailable();
        let (frames, on_frame) = recorder();
        let controller = TypingController::start(clock.clone(), TypingConfig::default(), on_frame);
        clock.advance_ms(5000);
        assert_eq!(
            *frames.lock().unwrap(),
            vec![TypingFrame {
                text: String::new(),
                cursor_on: true,
            }]
        );
        assert_eq!(controller.visible_len(), 0);
    }
}
