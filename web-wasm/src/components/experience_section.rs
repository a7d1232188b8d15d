//! 職歴タイムラインセクション

use leptos::prelude::*;
use portfolio_common::{timeline, ExperienceItem, SectionHeading, TimelineSide};

#[component]
pub fn ExperienceSection(heading: SectionHeading, experiences: Vec<ExperienceItem>) -> impl IntoView {
    let rows = timeline(&experiences)
        .into_iter()
        .map(|entry| {
            let row_class = match entry.side {
                TimelineSide::Left => "timeline-row",
                TimelineSide::Right => "timeline-row reverse",
            };
            let align_class = format!("timeline-card-wrap {}", entry.side.as_str());
            let show_achievements = entry.show_achievements();
            let logo_alt = entry.logo_alt();
            let item = entry.item.clone();
            let achievements = item.achievements.clone();
            let skills = item.skills.clone();
            let dot_class = if item.current { "timeline-dot current" } else { "timeline-dot" };

            view! {
                <div class=row_class>
                    <div class="timeline-half p-4">
                        <div class=align_class>
                            <div class="card timeline-card">
                                <div class="card-header flex items-center gap-4 pb-2">
                                    {item.logo.clone().map(|logo| view! {
                                        <div class="logo rounded-full overflow-hidden bg-muted flex items-center justify-center">
                                            <img src=logo alt=logo_alt class="object-contain" />
                                        </div>
                                    })}
                                    <div>
                                        <h3 class="text-xl font-semibold">{item.position.clone()}</h3>
                                        <div class="text-muted-foreground flex gap-2">
                                            <span class="font-medium">{item.company.clone()}</span>
                                            <span class="separator">"•"</span>
                                            <span>{item.duration.clone()}</span>
                                        </div>
                                        <div class="text-sm text-muted-foreground mt-1">
                                            {item.location.clone()}
                                        </div>
                                    </div>
                                </div>
                                <div class="card-content">
                                    <p class="mb-4">{item.description.clone()}</p>

                                    {show_achievements.then(|| view! {
                                        <div class="mb-4">
                                            <h4 class="font-semibold mb-2">"Key Achievements:"</h4>
                                            <ul class="list-disc pl-5 space-y-1">
                                                {achievements
                                                    .into_iter()
                                                    .map(|a| view! { <li class="text-sm">{a}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    })}

                                    <div class="flex flex-wrap gap-2">
                                        {skills
                                            .into_iter()
                                            .map(|s| view! { <span class="badge badge-secondary">{s}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="timeline-dot-wrap">
                        <div class=dot_class></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="py-16 px-4 bg-background">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12 fade-in">
                    <h2 class="text-3xl font-bold mb-4">{heading.title}</h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">{heading.subtitle}</p>
                </div>

                <div class="timeline relative">
                    <div class="timeline-line"></div>
                    <div class="space-y-12">{rows}</div>
                </div>
            </div>
        </div>
    }
}
