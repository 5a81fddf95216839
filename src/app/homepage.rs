use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactSection;
use super::hero::{AboutSection, HeroSection};
use super::resume::{
    EducationSection, ExperienceSection, LeadershipSection, ProjectsSection, SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroSection />
        <div class="max-w-6xl mx-auto px-4 page-content">
            <AboutSection />
            <EducationSection />
            <SkillsSection />
            <ExperienceSection />
            <ProjectsSection />
            <LeadershipSection />
            <ContactSection />
        </div>
    }
}
