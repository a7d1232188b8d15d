//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use portfolio_common::{ProjectCatalog, Section, SiteContent};
use crate::components::{
    contact_section::ContactSection,
    experience_section::ExperienceSection,
    footer::Footer,
    header::Header,
    hero_section::HeroSection,
    projects_section::ProjectsSection,
};
use crate::dom;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let content = SiteContent::default();

    // タグインデックスはここで1回だけ計算される
    let catalog = match content.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            dom::log(&format!("catalog error: {}", e));
            ProjectCatalog::default()
        }
    };

    view! {
        <div class="min-h-screen bg-background">
            <Header />

            <main class="container mx-auto px-4 pt-24">
                <section id=Section::Hero.id() class="py-12">
                    <HeroSection profile=content.profile.clone() />
                </section>

                <section id=Section::Projects.id() class="py-16">
                    <ProjectsSection
                        heading=content.projects_heading.clone()
                        catalog=catalog
                    />
                </section>

                <section id=Section::Experience.id() class="py-16">
                    <ExperienceSection
                        heading=content.experience_heading.clone()
                        experiences=content.experiences.clone()
                    />
                </section>

                <section id=Section::Contact.id() class="py-16">
                    <h2 class="text-3xl font-bold mb-8">"Contact"</h2>
                    <ContactSection contact=content.contact.clone() />
                </section>
            </main>

            <Footer owner=content.owner.clone() contact=content.contact.clone() />
        </div>
    }
}
