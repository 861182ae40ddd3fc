use leptos::prelude::*;

use crate::site::{BRAND, PROFILE_IMAGE};

/// Circular profile photo with the rotating gradient ring and name badge.
#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="relative flex-shrink-0">
            <div
                class="absolute -inset-4 rounded-full opacity-40 animate-pulse-glow"
                style="background: conic-gradient(from 180deg, #c026d3, #7c3aed, #c026d3); mask: radial-gradient(farthest-side, transparent calc(100% - 2px), #000 calc(100% - 2px)); -webkit-mask: radial-gradient(farthest-side, transparent calc(100% - 2px), #000 calc(100% - 2px));"
            />
            <div class="absolute -inset-8 rounded-full border border-primary/10" />

            <div
                class="relative h-72 w-72 rounded-full p-[3px] md:h-[340px] md:w-[340px] lg:h-[400px] lg:w-[400px]"
                style="background: linear-gradient(135deg, #c026d3 0%, #7c3aed 50%, #c026d3 100%);"
            >
                <div class="relative h-full w-full overflow-hidden rounded-full">
                    <img
                        src=PROFILE_IMAGE
                        alt="Thiago - Automation Specialist"
                        class="h-full w-full object-cover object-top"
                    />
                    <div
                        class="pointer-events-none absolute inset-0 rounded-full"
                        style="background: radial-gradient(ellipse at center, transparent 55%, #0f0d1a 100%);"
                    />
                    <div
                        class="pointer-events-none absolute right-0 bottom-0 left-0 h-1/3"
                        style="background: linear-gradient(to top, #0f0d1a 0%, transparent 100%); border-radius: 0 0 9999px 9999px;"
                    />
                </div>
            </div>

            <div class="absolute -bottom-2 left-1/2 -translate-x-1/2 rounded-full border border-border bg-card px-4 py-1.5 text-xs font-bold text-primary shadow-lg shadow-primary/10">
                {BRAND}
            </div>
        </div>
    }
}
