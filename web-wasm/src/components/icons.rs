//! インラインSVGアイコン

use leptos::prelude::*;

const GITHUB: &[&str] = &[
    "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
    "M9 18c-4.51 2-5-2-7-2",
];
const LINKEDIN: &[&str] = &[
    "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
    "M2 9h4v12H2z",
    "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
];
const MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "M22 6l-10 7L2 6",
];
const MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
const CLOSE: &[&str] = &["M18 6 6 18", "m6 6 12 12"];
const DOWNLOAD: &[&str] = &["M12 17V3", "m6 11 6 6 6-6", "M19 21H5"];

#[component]
fn Icon(
    paths: &'static [&'static str],
    size: u32,
    class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|&d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}

#[component]
pub fn GithubIcon(
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <Icon paths=GITHUB size=size class=class /> }
}

#[component]
pub fn LinkedinIcon(
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <Icon paths=LINKEDIN size=size class=class /> }
}

#[component]
pub fn MailIcon(
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! { <Icon paths=MAIL size=size class=class /> }
}

#[component]
pub fn MenuIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! { <Icon paths=MENU size=size class=String::new() /> }
}

#[component]
pub fn CloseIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! { <Icon paths=CLOSE size=size class=String::new() /> }
}

#[component]
pub fn DownloadIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! { <Icon paths=DOWNLOAD size=16 class=class /> }
}
