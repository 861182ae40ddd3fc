use leptos::prelude::*;

use super::{
    avatar::Avatar,
    contact::Contact,
    icons::WhatsAppIcon,
    reveal::{Reveal, SectionHeading},
    terminal::TypingTerminal,
};
use crate::site::{BRAND, INSTAGRAM_URL, PROJECT_VIDEO, SKILLS, WHATSAPP_URL};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Projects />
        <Skills />
        <Contact />
    }
}

#[component]
fn FloatingIcon(icon: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "absolute flex items-center justify-center rounded-xl border border-border bg-card/80 p-2.5 backdrop-blur-sm transition-transform duration-300 hover:scale-125 hover:border-primary/50 {class}",
        )>
            <i class=format!("{icon} text-lg text-primary/70") />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen overflow-hidden px-6 pt-24 pb-16">
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 opacity-[0.07]"
                style="background-image: radial-gradient(circle, #8b7fa3 1px, transparent 1px); background-size: 32px 32px;"
            />
            <div
                aria-hidden="true"
                class="pointer-events-none absolute top-1/2 right-[15%] h-[420px] w-[420px] -translate-y-1/2 rounded-full opacity-[0.06] blur-[80px]"
                style="background: #c026d3;"
            />

            // kept clear of the copy on the left
            <FloatingIcon icon="icon-cpu" class="animate-float-slow top-28 right-[6%] hidden md:flex" />
            <FloatingIcon
                icon="icon-database"
                class="animate-float-medium bottom-20 right-[4%] hidden md:flex"
            />
            <FloatingIcon icon="icon-palette" class="animate-float-fast top-24 left-[4%] hidden md:flex" />
            <FloatingIcon
                icon="icon-layers"
                class="animate-float-medium bottom-16 left-[6%] hidden md:flex"
            />
            <FloatingIcon icon="icon-globe" class="animate-float-slow top-20 left-[30%] hidden lg:flex" />
            <FloatingIcon
                icon="icon-braces"
                class="animate-float-fast bottom-36 left-[35%] hidden lg:flex"
            />

            <div class="relative z-10 mx-auto flex max-w-6xl flex-col items-center gap-12 md:flex-row md:items-center md:justify-between">
                <div class="flex-1 text-center md:text-left">
                    <div class="mb-8 inline-flex items-center gap-2 rounded-full border border-primary/30 bg-primary/10 px-4 py-1.5">
                        <span class="relative flex h-2.5 w-2.5">
                            <span class="absolute inline-flex h-full w-full animate-ping rounded-full bg-[#22c55e] opacity-75" />
                            <span class="relative inline-flex h-2.5 w-2.5 rounded-full bg-[#22c55e]" />
                        </span>
                        <span class="text-xs tracking-wider text-primary">">_  Deploying..."</span>
                    </div>

                    <h1 class="text-balance text-4xl font-bold leading-tight tracking-tight text-foreground md:text-5xl lg:text-6xl">
                        "Olá, eu sou"
                        <span class="text-foreground">" Thiago"</span>
                        <br />
                        <span class="text-primary">" Desenvolvedor & Automação"</span>
                    </h1>

                    <TypingTerminal />

                    <p class="mt-6 max-w-lg text-pretty text-sm leading-relaxed text-muted-foreground md:text-base">
                        "Desenvolvo ecossistemas digitais de alta performance. Unindo design exclusivo, sites extremamente rápidos e automações que eliminam tarefas manuais. Meu foco é criar interfaces inteligentes que trabalham por você."
                    </p>

                    <div class="mt-8 flex flex-col items-center gap-4 sm:flex-row md:items-start">
                        <a
                            href=WHATSAPP_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group inline-flex items-center gap-2 rounded-full bg-primary px-7 py-3 text-sm font-bold text-primary-foreground transition-all hover:brightness-110"
                        >
                            "Quero um Orçamento"
                            <i class="icon-arrow-right transition-transform group-hover:translate-x-1" />
                        </a>
                        <a
                            href="#projetos"
                            class="group inline-flex items-center gap-2 rounded-full border border-border bg-card px-7 py-3 text-sm font-bold text-foreground transition-colors hover:border-primary hover:text-primary"
                        >
                            <i class="icon-download transition-transform group-hover:-translate-y-0.5" />
                            "Ver Projetos"
                        </a>
                    </div>

                    <div class="mt-8 flex items-center gap-4 max-md:justify-center">
                        <span class="text-xs text-muted-foreground">"Follow me on:"</span>
                        <a
                            href=WHATSAPP_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="WhatsApp"
                            class="flex h-9 w-9 items-center justify-center rounded-lg border border-border bg-card text-muted-foreground transition-all hover:border-primary hover:text-primary icon-hover"
                        >
                            <WhatsAppIcon />
                        </a>
                        <a
                            href=INSTAGRAM_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Instagram"
                            class="flex h-9 w-9 items-center justify-center rounded-lg border border-border bg-card text-muted-foreground transition-all hover:border-primary hover:text-primary icon-hover"
                        >
                            <i class="icon-instagram" />
                        </a>
                    </div>
                </div>

                <Avatar />
            </div>
        </section>
    }
}

/// Card with macOS style window chrome.
#[component]
fn MacWindow(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-xl border border-border bg-card/90 backdrop-blur-sm transition-all hover:border-primary/40 hover:shadow-lg hover:shadow-primary/5">
            <div class="flex items-center gap-2 border-b border-border bg-secondary/60 px-4 py-2.5">
                <span class="h-3 w-3 rounded-full bg-[#ef4444]" />
                <span class="h-3 w-3 rounded-full bg-[#eab308]" />
                <span class="h-3 w-3 rounded-full bg-[#22c55e]" />
                <span class="ml-2 text-[11px] text-muted-foreground">{title}</span>
            </div>
            <div class="p-5">{children()}</div>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="sobre" class="scroll-mt-20 px-6 py-24">
            <div class="mx-auto max-w-6xl text-left">
                <SectionHeading label="Sobre" />
                <Reveal class="reveal mt-12">
                    <MacWindow title="Sobre.md">
                        <p class="text-sm leading-relaxed text-muted-foreground md:text-base">
                            <span class="text-primary">"// "</span>
                            <span class="font-bold text-foreground">{BRAND}</span>
                            ". Especializado em interfaces modernas e automação de sistemas. Foco em tecnologia limpa, design sóbrio e processos que rodam sozinhos."
                        </p>
                    </MacWindow>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projetos" class="scroll-mt-20 px-6 py-24">
            <div class="mx-auto max-w-5xl text-left">
                <SectionHeading label="Projeto em Destaque" />
                <Reveal class="reveal mt-12">
                    <article class="group overflow-hidden rounded-2xl border border-border bg-card/30 backdrop-blur-md transition-all hover:border-primary/30 shadow-2xl">
                        <div class="relative aspect-video w-full overflow-hidden border-b border-border bg-black/20">
                            <video
                                src=PROJECT_VIDEO
                                autoplay=true
                                loop=true
                                muted=true
                                playsinline=true
                                class="h-full w-full object-cover transition-transform duration-700 group-hover:scale-105"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent" />
                        </div>

                        <div class="p-8 md:p-12">
                            <div class="flex flex-col md:flex-row md:items-center justify-between gap-8">
                                <div>
                                    <h3 class="text-2xl md:text-3xl font-bold text-foreground">
                                        "Design Premium focado em captação de clientes"
                                    </h3>
                                    <p class="mt-4 text-muted-foreground text-sm leading-relaxed max-w-xl">
                                        "Interface desenvolvida para elevar o posicionamento de marca e converter visitantes em clientes de alto padrão. Landing Page otimizada com funil de conversão direto para o WhatsApp e Automação."
                                    </p>
                                </div>
                                <div class="flex flex-col gap-4 items-start md:items-end">
                                    <div class="flex gap-2">
                                        {["Design", "Code"]
                                            .into_iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-3 py-1 text-[10px] uppercase tracking-widest bg-primary/10 text-primary border border-primary/20 rounded-full">
                                                        {tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <a
                                        href=WHATSAPP_URL
                                        class="inline-flex items-center gap-2 text-xs font-bold text-foreground hover:text-primary transition-colors"
                                    >
                                        "VER DETALHES"
                                        <i class="icon-arrow-up-right" />
                                    </a>
                                </div>
                            </div>
                        </div>
                    </article>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="scroll-mt-20 px-6 py-24">
            <div class="mx-auto max-w-6xl">
                <SectionHeading label="Skills" />
                <Reveal class="reveal-stagger mt-12 grid gap-6 sm:grid-cols-2">
                    {SKILLS
                        .into_iter()
                        .map(|s| {
                            view! {
                                <div class="group rounded-xl border border-border bg-card p-6 transition-all hover:border-primary/40 hover:shadow-lg hover:shadow-primary/5">
                                    <div class="mb-4 flex h-10 w-10 items-center justify-center rounded-lg bg-primary/10 transition-transform group-hover:scale-110 group-hover:bg-primary/20">
                                        <i class=format!(
                                            "{} text-xl text-primary transition-transform group-hover:scale-110",
                                            s.icon.class(),
                                        ) />
                                    </div>
                                    <h3 class="text-base font-bold text-foreground">{s.title}</h3>
                                    <p class="mt-2 text-sm leading-relaxed text-muted-foreground">
                                        {s.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
