//! プロジェクトセクション
//!
//! タグのタブで絞り込み、該当するプロジェクトをカードで表示する。

use leptos::prelude::*;
use portfolio_common::{FilterState, ProjectCard, ProjectCatalog, ProjectRecord, SectionHeading};
use crate::components::project_card::ProjectCardView;

#[component]
pub fn ProjectsSection(heading: SectionHeading, catalog: ProjectCatalog) -> impl IntoView {
    let (filter, set_filter) = signal(FilterState::default());

    let tags: Vec<String> = catalog.tags().as_slice().to_vec();
    let catalog = StoredValue::new(catalog);

    // 選択タグが変わるたびに再計算
    let filtered = Memo::new(move |_| {
        filter.with(|state| {
            catalog.with_value(|c| {
                state
                    .apply(c.projects())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<ProjectRecord>>()
            })
        })
    });

    view! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-3xl font-bold mb-4">{heading.title}</h2>
                <p class="text-muted-foreground max-w-2xl mx-auto">{heading.subtitle}</p>
            </div>

            <div class="flex justify-center mb-8">
                <div class="tabs-list" role="tablist">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            let is_active = {
                                let tag = tag.clone();
                                move || filter.with(|f| f.selected() == tag)
                            };
                            let aria_selected = {
                                let is_active = is_active.clone();
                                move || is_active().to_string()
                            };
                            let on_select = {
                                let tag = tag.clone();
                                move |_| set_filter.update(|f| f.select(tag.clone()))
                            };
                            view! {
                                <button
                                    class="tabs-trigger capitalize"
                                    class:active=is_active
                                    role="tab"
                                    aria-selected=aria_selected
                                    on:click=on_select
                                >
                                    {tag}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show
                when=move || filtered.with(|p| !p.is_empty())
                fallback=|| view! { <p class="empty-state text-muted-foreground">"No projects match this filter."</p> }
            >
                <div class="grid grid-cols-1 md-grid-cols-2 lg-grid-cols-3 gap-8">
                    <For
                        each=move || filtered.get()
                        key=|project| project.id.clone()
                        children=move |project| {
                            view! { <ProjectCardView card=ProjectCard::from(&project) /> }
                        }
                    />
                </div>
            </Show>

            <div class="text-center mt-12">
                <button
                    class="btn btn-outline btn-lg"
                    on:click=move |_| set_filter.update(|f| f.reset())
                >
                    "View All Projects"
                </button>
            </div>
        </div>
    }
}
