//! ヘッダーコンポーネント
//!
//! デスクトップ用ナビゲーションとモバイルメニュー。

use leptos::prelude::*;
use portfolio_common::{MenuState, Section};
use crate::components::icons::{CloseIcon, MenuIcon};
use crate::dom::scroll_to_section;

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());

    // スクロール先が見つかったときだけメニューを閉じる
    let navigate = move |section: Section| {
        let found = scroll_to_section(section);
        set_menu.update(|m| m.after_navigate(found));
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-background-blur border-b">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div class="font-bold text-xl">"Portfolio"</div>

                <button
                    class="md-hidden p-2 rounded-md hover-accent"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu.update(|m| m.toggle())
                >
                    <Show when=move || menu.get().open fallback=|| view! { <MenuIcon /> }>
                        <CloseIcon />
                    </Show>
                </button>

                <nav class="hidden md-flex space-x-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="nav-link"
                                    on:click=move |_| navigate(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <Show when=move || menu.get().open>
                <div class="md-hidden bg-background border-b">
                    <div class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="nav-link text-left py-2"
                                        on:click=move |_| navigate(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}
