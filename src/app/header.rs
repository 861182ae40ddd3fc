use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::site::{BRAND, NAV_LINKS};

/// Vertical scroll offset (px) past which the bar gets its backdrop.
const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct NavState {
    open: bool,
    scrolled: bool,
}

impl NavState {
    fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn set_scroll_y(&mut self, y: f64) {
        self.scrolled = y > SCROLL_THRESHOLD;
    }
}

const LINK_CLASS: &str =
    "text-xs tracking-widest uppercase text-muted-foreground transition-colors hover:text-primary";

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        nav.update(|n| n.set_scroll_y(y));
    });

    let header_class = move || {
        if nav.get().scrolled {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 border-b border-border bg-background/90 backdrop-blur-md"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <nav class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                <a
                    href="#"
                    class="flex items-center gap-2 text-foreground transition-colors hover:text-primary"
                >
                    <i class="icon-terminal text-xl text-primary icon-hover" />
                    <span class="text-sm font-bold tracking-wider uppercase">{BRAND}</span>
                </a>

                <ul class="hidden items-center gap-8 md:flex">
                    {NAV_LINKS
                        .into_iter()
                        .map(|l| {
                            view! {
                                <li>
                                    <a href=l.href class=LINK_CLASS>
                                        {l.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    aria-label="Toggle menu"
                    class="text-muted-foreground md:hidden"
                    on:click=move |_| nav.update(NavState::toggle)
                >
                    {move || {
                        if nav.get().open {
                            Either::Left(view! { <i class="icon-x text-xl" /> })
                        } else {
                            Either::Right(view! { <i class="icon-menu text-xl" /> })
                        }
                    }}
                </button>
            </nav>

            <Show when=move || nav.get().open>
                <div class="border-t border-border bg-background/95 backdrop-blur-md md:hidden">
                    <ul class="mx-auto flex max-w-6xl flex-col gap-4 px-6 py-6">
                        {NAV_LINKS
                            .into_iter()
                            .map(|l| {
                                view! {
                                    <li>
                                        <a
                                            href=l.href
                                            class=LINK_CLASS
                                            on:click=move |_| nav.update(NavState::close)
                                        >
                                            {l.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </header>
    }
}
