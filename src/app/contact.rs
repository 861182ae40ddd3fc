use leptos::{either::Either, prelude::*};

use super::{
    icons::WhatsAppIcon,
    reveal::{Reveal, SectionHeading},
};
use crate::site::{
    mailto, ContactField, FieldKind, CONTACT_FIELDS, EMAIL, FORM_ENDPOINT, FORM_METHOD,
    INSTAGRAM_HANDLE, INSTAGRAM_URL, WHATSAPP_URL,
};

const FIELD_CLASS: &str = "rounded-lg border border-border bg-secondary px-4 py-2.5 text-sm text-foreground placeholder-muted-foreground outline-none transition-colors focus:border-primary";
const LINK_CLASS: &str =
    "flex items-center gap-3 text-sm text-muted-foreground transition-colors hover:text-primary";

// Validation and submission are left to the browser and the relay.
#[component]
fn Field(field: ContactField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::TextArea { rows } => Either::Left(view! {
            <textarea
                name=field.name
                required=field.required
                rows=rows.to_string()
                placeholder=field.placeholder
                class=format!("resize-none {FIELD_CLASS}")
            />
        }),
        FieldKind::Text | FieldKind::Email => Either::Right(view! {
            <input
                type=field.input_type().unwrap_or("text")
                name=field.name
                required=field.required
                placeholder=field.placeholder
                class=FIELD_CLASS
            />
        }),
    };
    view! {
        <label class="flex flex-col gap-1.5">
            <span class="text-xs tracking-wider uppercase text-muted-foreground">{field.label}</span>
            {control}
        </label>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contato" class="scroll-mt-20 px-6 py-24">
            <div class="mx-auto max-w-6xl">
                <SectionHeading label="Contato" />

                <Reveal class="reveal mt-12 rounded-xl border border-border bg-card p-8 md:p-12">
                    <div class="grid gap-10 md:grid-cols-2">
                        <div>
                            <h3 class="text-xl font-bold text-foreground">
                                "Vamos construir seu próximo projeto!"
                            </h3>
                            <p class="mt-3 text-sm leading-relaxed text-muted-foreground">
                                "Pronto para elevar o nível do seu negócio com um design exclusivo e automações que funcionam? Entre em contato para transformarmos sua ideia em um sistema eficiente."
                            </p>

                            <div class="mt-8 flex flex-col gap-4">
                                <a
                                    href=WHATSAPP_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=LINK_CLASS
                                >
                                    <WhatsAppIcon class="text-primary icon-hover" />
                                    "WhatsApp"
                                </a>
                                <a
                                    href=INSTAGRAM_URL
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=LINK_CLASS
                                >
                                    <i class="icon-instagram text-primary icon-hover" />
                                    {INSTAGRAM_HANDLE}
                                </a>
                                <a href=mailto() class=LINK_CLASS>
                                    <i class="icon-mail text-primary icon-hover" />
                                    {EMAIL}
                                </a>
                            </div>
                        </div>

                        <form action=FORM_ENDPOINT method=FORM_METHOD class="flex flex-col gap-4">
                            {CONTACT_FIELDS
                                .into_iter()
                                .map(|field| view! { <Field field /> })
                                .collect_view()}
                            <button
                                type="submit"
                                class="group mt-2 inline-flex items-center justify-center gap-2 rounded-full bg-primary px-6 py-3 text-xs font-bold tracking-widest uppercase text-primary-foreground transition-all hover:brightness-110"
                            >
                                "Enviar Mensagem"
                                <i class="icon-arrow-right transition-transform group-hover:translate-x-1" />
                            </button>
                        </form>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
