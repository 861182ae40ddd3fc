use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::effects::{
    Fire, ScheduleError, Scheduler, Tick, TypingConfig, TypingController, TypingFrame,
};

/// Timers from the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

fn unavailable(err: JsValue) -> ScheduleError {
    ScheduleError::Unavailable(format!("{err:?}"))
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn interval(&self, period: Duration, tick: Tick) -> Result<BrowserTimer, ScheduleError> {
        set_interval_with_handle(move || tick(), period)
            .map(BrowserTimer::Interval)
            .map_err(unavailable)
    }

    fn timeout(&self, delay: Duration, fire: Fire) -> Result<BrowserTimer, ScheduleError> {
        set_timeout_with_handle(move || fire(), delay)
            .map(BrowserTimer::Timeout)
            .map_err(unavailable)
    }

    fn cancel(&self, handle: BrowserTimer) {
        match handle {
            BrowserTimer::Interval(h) => h.clear(),
            BrowserTimer::Timeout(h) => h.clear(),
        }
    }
}

fn cursor_class(cursor_on: bool) -> &'static str {
    if cursor_on {
        "inline-block h-4 w-1.5 translate-y-0.5 bg-primary opacity-100"
    } else {
        "inline-block h-4 w-1.5 translate-y-0.5 bg-primary opacity-0"
    }
}

#[component]
pub fn TypingTerminal() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (cursor_on, set_cursor_on) = signal(true);
    let controller = StoredValue::new(None::<TypingController<BrowserScheduler>>);

    // effects only run in the browser, so the server renders the empty frame
    Effect::new(move |_| {
        if controller.with_value(Option::is_some) {
            return;
        }
        let started = TypingController::start(
            BrowserScheduler,
            TypingConfig::default(),
            move |frame: TypingFrame| {
                set_text.set(frame.text);
                set_cursor_on.set(frame.cursor_on);
            },
        );
        controller.set_value(Some(started));
    });

    on_cleanup(move || {
        controller.try_update_value(|c| {
            if let Some(c) = c.take() {
                c.dispose();
            }
        });
    });

    view! {
        <div class="mt-8 w-full max-w-md rounded-xl border border-border bg-card/90 p-4 text-left backdrop-blur-sm">
            <div class="mb-3 flex items-center gap-2">
                <span class="h-3 w-3 rounded-full bg-[#ef4444]" />
                <span class="h-3 w-3 rounded-full bg-[#eab308]" />
                <span class="h-3 w-3 rounded-full bg-[#22c55e]" />
                <span class="ml-2 text-xs text-muted-foreground">"terminal"</span>
            </div>
            <p class="text-sm text-muted-foreground">
                <span class="text-primary">"$"</span>
                " "
                <span class="text-foreground">{text}</span>
                <span class=move || cursor_class(cursor_on.get()) />
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_class_only_changes_opacity() {
        let on = cursor_class(true);
        let off = cursor_class(false);
        assert!(on.ends_with("opacity-100"));
        assert!(off.ends_with("opacity-0"));
        assert_eq!(
            on.trim_end_matches("opacity-100"),
            off.trim_end_matches("opacity-0")
        );
    }
}
