use leptos::prelude::*;

use crate::portfolio::{ACTIVITIES, EDUCATION, EXPERIENCE, LEADERSHIP, PROJECTS, SKILLS};

#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    view! { <h2 class="text-2xl font-bold my-8 border-b border-muted/30 pb-2">{text}</h2> }
}

#[component]
fn Tag(text: &'static str) -> impl IntoView {
    view! { <span class="rounded-md px-2 py-1 bg-brightBlack mr-2 mb-2 text-sm inline-block">{text}</span> }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="section-content">
            <SectionTitle text="Education" />
            <div class="space-y-4 border-l-4 border-purple pl-6">
                {EDUCATION
                    .iter()
                    .map(|e| {
                        view! {
                            <div class="space-y-1">
                                <div class="font-bold text-cyan">{e.years}</div>
                                <h3 class="text-lg font-bold">{e.degree}</h3>
                                <h4>{e.institution}</h4>
                                <p class="text-sm text-muted">"Branch: " {e.branch}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section-content">
            <SectionTitle text="Skills & Technologies" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="bg-brightBlack/30 p-4 rounded-md">
                                <h3 class="font-bold mb-3">{group.title}</h3>
                                <div>
                                    {group
                                        .skills
                                        .iter()
                                        .copied()
                                        .map(|s| view! { <Tag text=s /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="section-content">
            <SectionTitle text="Experience" />
            <div class="space-y-6">
                {EXPERIENCE
                    .iter()
                    .map(|x| {
                        view! {
                            <div class="space-y-2">
                                <div class="flex items-start justify-between">
                                    <div class="text-left">
                                        <h3 class="text-lg font-bold">{x.title}</h3>
                                        <h4 class="text-muted">{x.organization}</h4>
                                    </div>
                                    <div class="shrink-0 text-right font-bold">{x.year}</div>
                                </div>
                                <ul class="list-disc pl-6 space-y-1 text-sm">
                                    {x.highlights.iter().copied().map(|h| view! { <li>{h}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section-content">
            <SectionTitle text="Featured Projects" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        view! {
                            <div class="bg-brightBlack/30 rounded-lg border border-muted/30 overflow-hidden">
                                {p
                                    .image
                                    .map(|src| {
                                        view! {
                                            <img class="w-full h-48 object-cover" src=src alt=p.name />
                                        }
                                    })}
                                <div class="p-4">
                                    <h3 class="text-lg font-bold">{p.name}</h3>
                                    <p class="text-sm text-cyan mb-2">{p.subtitle}</p>
                                    <p class="text-sm leading-relaxed">{p.description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn LeadershipSection() -> impl IntoView {
    view! {
        <section id="leadership" class="section-content">
            <SectionTitle text="Leadership & Extra-curricular" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple">
                    <h3 class="font-bold mb-2">"Leadership"</h3>
                    <p class="text-sm leading-relaxed">{LEADERSHIP}</p>
                </div>
                <div class="bg-brightBlack/30 p-4 rounded-md">
                    <h3 class="font-bold mb-2">"Extra-curricular Activities"</h3>
                    <div>{ACTIVITIES.iter().copied().map(|a| view! { <Tag text=a /> }).collect_view()}</div>
                </div>
            </div>
        </section>
    }
}
