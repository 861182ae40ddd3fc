use leptos::{either::EitherOf3, prelude::*};

use super::icons::WhatsAppIcon;
use crate::site::{mailto, BRAND, BUILD_YEAR, INSTAGRAM_URL, WHATSAPP_URL};

enum Social {
    WhatsApp,
    Instagram,
    Email,
}

impl Social {
    fn label(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Instagram => "Instagram",
            Self::Email => "Email",
        }
    }

    fn href(&self) -> String {
        match self {
            Self::WhatsApp => WHATSAPP_URL.to_string(),
            Self::Instagram => INSTAGRAM_URL.to_string(),
            Self::Email => mailto(),
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border px-6 py-8">
            <div class="mx-auto flex max-w-6xl flex-col items-center justify-between gap-4 md:flex-row">
                <div class="flex items-center gap-2 text-sm text-muted-foreground">
                    <i class="icon-terminal text-primary" />
                    <span>{format!("{BRAND} © {BUILD_YEAR}")}</span>
                </div>

                <div class="flex items-center gap-4">
                    {[Social::WhatsApp, Social::Instagram, Social::Email]
                        .into_iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=s.label()
                                    class="flex h-8 w-8 items-center justify-center rounded-lg border border-border bg-card text-muted-foreground transition-all hover:border-primary hover:text-primary icon-hover"
                                >
                                    {match s {
                                        Social::WhatsApp => EitherOf3::A(view! { <WhatsAppIcon /> }),
                                        Social::Instagram => EitherOf3::B(view! { <i class="icon-instagram" /> }),
                                        Social::Email => EitherOf3::C(view! { <i class="icon-mail" /> }),
                                    }}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
