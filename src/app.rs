mod avatar;
mod contact;
mod footer;
mod header;
mod homepage;
mod icons;
mod reveal;
mod terminal;

pub use reveal::{use_reveal, Reveal};
pub use terminal::{BrowserScheduler, TypingTerminal};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site;
use footer::Footer;
use header::Navbar;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="icon"
                    href="/icon-light-32x32.png"
                    media="(prefers-color-scheme: light)"
                />
                <link
                    rel="icon"
                    href="/icon-dark-32x32.png"
                    media="(prefers-color-scheme: dark)"
                />
                <link rel="icon" type="image/svg+xml" href="/icon.svg" />
                <link rel="apple-touch-icon" href="/apple-icon.png" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Geist+Mono:wght@100..900&display=swap"
                />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/thiago-site.css" />
                <script id="fb-pixel" inner_html=site::pixel_snippet(site::PIXEL_ID)></script>
                <MetaTags />
            </head>
            <body class="font-mono antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=site::TITLE />
        <Meta name="description" content=site::DESCRIPTION />
        <Meta name="theme-color" content=site::THEME_COLOR />

        <Router>
            <main class="relative overflow-x-hidden bg-transparent">
                <BackgroundVideo />
                <Navbar />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
                <Footer />
            </main>
        </Router>
    }
}

#[component]
fn BackgroundVideo() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-50 h-full w-full overflow-hidden pointer-events-none">
            <video
                src=site::BACKGROUND_VIDEO
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                class="h-full w-full object-cover"
            />
            // keeps white text readable over the footage
            <div class="absolute inset-0 bg-[#0f0d1a]/80 backdrop-blur-[2px]" />
        </div>
    }
}
