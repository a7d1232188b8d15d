//! プロジェクトカードコンポーネント

use leptos::prelude::*;
use portfolio_common::ProjectCard;
use crate::components::icons::GithubIcon;

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let alt = card.image_alt().to_string();

    view! {
        <div class="card overflow-hidden h-full flex flex-col">
            <div class="card-image relative overflow-hidden">
                <img src=card.image alt=alt class="w-full h-full object-cover" />
            </div>

            <div class="card-header pb-2">
                <h3 class="text-xl font-bold">{card.title}</h3>
            </div>

            <div class="card-content flex-grow">
                <p class="text-muted-foreground mb-4">{card.description}</p>
                <div class="flex flex-wrap gap-2">
                    {card
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="badge badge-secondary">{tag}</span> })
                        .collect_view()}
                </div>
            </div>

            <div class="card-footer flex justify-between pt-4 gap-2">
                <a
                    class="btn btn-outline btn-sm"
                    href=card.repo_url
                    target=ProjectCard::LINK_TARGET
                    rel=ProjectCard::LINK_REL
                >
                    <GithubIcon size=16 class="mr-2" />
                    "Code"
                </a>
            </div>
        </div>
    }
}
