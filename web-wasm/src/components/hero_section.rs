//! ヒーローセクション

use leptos::prelude::*;
use portfolio_common::{Profile, Section};
use crate::components::icons::{DownloadIcon, GithubIcon, LinkedinIcon, MailIcon};

#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    let avatar_alt = profile.avatar_alt();
    let links = profile.social_links.clone();

    view! {
        <div class="w-full hero flex items-center justify-center py-20 bg-background">
            <div class="container px-4 flex flex-col lg-flex-row items-center gap-12">
                <div class="flex-1 space-y-6 fade-in">
                    <div class="space-y-2">
                        <h1 class="text-4xl font-bold tracking-tighter">
                            "Hi, I'm " {profile.name.clone()}
                        </h1>
                        <h2 class="text-2xl font-medium text-primary">{profile.title.clone()}</h2>
                    </div>

                    <p class="max-w-prose text-muted-foreground text-lg">
                        {profile.description.clone()}
                    </p>

                    <div class="flex flex-wrap gap-4">
                        <a class="btn btn-primary btn-lg" href=Section::Projects.anchor()>
                            "View My Work"
                        </a>
                        <a class="btn btn-outline btn-lg" href=profile.resume_url.clone() download="">
                            <DownloadIcon class="mr-2" />
                            "Download Resume"
                        </a>
                    </div>

                    <div class="flex items-center gap-4 pt-4">
                        {links.github.map(|href| view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="social-link">
                                <GithubIcon />
                                <span class="sr-only">"GitHub"</span>
                            </a>
                        })}
                        {links.linkedin.map(|href| view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="social-link">
                                <LinkedinIcon />
                                <span class="sr-only">"LinkedIn"</span>
                            </a>
                        })}
                        {links.email.map(|href| view! {
                            <a href=href class="social-link">
                                <MailIcon />
                                <span class="sr-only">"Email"</span>
                            </a>
                        })}
                    </div>
                </div>

                <div class="flex-shrink-0 fade-in">
                    <div class="avatar rounded-full overflow-hidden shadow-xl">
                        <img
                            src=profile.avatar_url.clone()
                            alt=avatar_alt
                            class="w-full h-full object-cover"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
