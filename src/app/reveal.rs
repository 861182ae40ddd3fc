use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::effects::{
    Observation, RatioSink, RevealController, VisibilityObserver, DEFAULT_REVEAL_THRESHOLD,
};

/// Backed by the browser's IntersectionObserver. Where that API is missing
/// leptos-use never calls back, so the region simply stays unrevealed.
struct ViewportObserver {
    target: NodeRef<html::Div>,
}

impl VisibilityObserver for ViewportObserver {
    fn observe(&self, threshold: f64, mut on_ratio: RatioSink) -> Option<Observation> {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            self.target,
            move |entries, _| {
                for entry in entries {
                    on_ratio(entry.intersection_ratio());
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );
        Some(Observation::new(stop))
    }
}

/// Returns the node to attach and a signal that flips to `true` once, the
/// first time at least `threshold` of the node is on screen.
pub fn use_reveal(threshold: f64) -> (NodeRef<html::Div>, Signal<bool>) {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    let controller = RevealController::new(threshold);
    controller.start(&ViewportObserver { target }, move || set_revealed.set(true));
    on_cleanup(move || controller.dispose());

    (target, revealed.into())
}

fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} visible")
    } else {
        base.to_string()
    }
}

/// Wraps children in a `div` that gains the `visible` class on first sight.
/// Pair with the `reveal` or `reveal-stagger` utilities from `input.css`.
#[component]
pub fn Reveal(
    #[prop(into)] class: String,
    #[prop(default = DEFAULT_REVEAL_THRESHOLD)] threshold: f64,
    children: Children,
) -> impl IntoView {
    let (node_ref, revealed) = use_reveal(threshold);
    view! {
        <div node_ref=node_ref class=move || reveal_class(&class, revealed.get())>
            {children()}
        </div>
    }
}

/// Centered section title between two rules.
#[component]
pub fn SectionHeading(label: &'static str) -> impl IntoView {
    view! {
        <Reveal class="reveal flex items-center gap-4">
            <div class="h-px flex-1 bg-border" />
            <h2 class="text-xs font-bold tracking-[0.3em] uppercase text-primary">{label}</h2>
            <div class="h-px flex-1 bg-border" />
        </Reveal>
    }
}
