use leptos::prelude::*;

use crate::portfolio::{Stat, ABOUT_HIGHLIGHTS, ABOUT_IMAGE, HERO_STATS, PROFILE};

#[component]
fn Avatar() -> impl IntoView {
    view! {
        <div class="relative flex items-center justify-center w-48 h-48 lg:w-64 lg:h-64">
            <div class="absolute inset-0 rounded-full border-4 border-purple/40 animate-pulse"></div>
            <div class="flex items-center justify-center w-40 h-40 lg:w-56 lg:h-56 rounded-full bg-brightBlack/60">
                <span class="text-5xl lg:text-6xl font-bold text-purple">{PROFILE.initials}</span>
            </div>
        </div>
    }
}

#[component]
fn StatRow(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-6 mt-6">
            {stats
                .iter()
                .map(|s| {
                    view! {
                        <div class="flex flex-col items-center">
                            <span class="text-2xl font-bold text-cyan">{s.value}</span>
                            <span class="text-sm text-muted">{s.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="flex flex-col lg:flex-row justify-center items-center gap-8 lg:gap-16 py-16 px-4 bg-gradient-to-br from-background to-brightBlack/40">
            <div class="flex-shrink-0">
                <Avatar />
            </div>
            <div class="max-w-2xl text-center lg:text-left">
                <h1 class="text-4xl lg:text-5xl font-bold">{PROFILE.name}</h1>
                <h2 class="text-xl lg:text-2xl mt-2 text-cyan">{PROFILE.title}</h2>
                <p class="text-lg mt-4 text-muted">{PROFILE.tagline}</p>
                <div class="flex flex-col sm:flex-row gap-2 sm:gap-6 mt-6 text-sm">
                    <span>"📍 " {PROFILE.location}</span>
                    <span>"📧 " {PROFILE.email}</span>
                    <span>"📱 " {PROFILE.phone}</span>
                </div>
                <StatRow stats=HERO_STATS />
                <div class="flex gap-4 mt-6 justify-center lg:justify-start">
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md border border-blue/40 text-blue hover:bg-blue/20 transition-all duration-200"
                    >
                        "💼 LinkedIn"
                    </a>
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md border border-muted/40 hover:bg-brightBlack/40 transition-all duration-200"
                    >
                        "💻 GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="flex flex-col lg:flex-row gap-8 lg:gap-12 items-center section-content">
            <div class="w-full lg:max-w-2xl">
                <h2 class="text-2xl font-bold my-8">"About Me"</h2>
                <p class="text-base mb-4 leading-relaxed">{PROFILE.objective}</p>
                <StatRow stats=ABOUT_HIGHLIGHTS />
            </div>
            <div class="w-full lg:max-w-md">
                <img class="rounded-lg shadow-2xl" src=ABOUT_IMAGE alt="AI Visualization" />
            </div>
        </section>
    }
}
