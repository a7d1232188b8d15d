//! フッターコンポーネント

use leptos::prelude::*;
use portfolio_common::ContactInfo;
use crate::components::icons::{GithubIcon, LinkedinIcon, MailIcon};
use crate::dom;

#[component]
pub fn Footer(owner: String, contact: ContactInfo) -> impl IntoView {
    let year = dom::current_year();

    view! {
        <footer class="bg-muted py-8 mt-16">
            <div class="container mx-auto px-4 text-center">
                <p class="text-muted-foreground">
                    {format!("© {} {}. All rights reserved.", year, owner)}
                </p>
                <div class="flex justify-center space-x-4 mt-4">
                    <a href=contact.github.href target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <GithubIcon size=20 class="footer-icon" />
                    </a>
                    <a href=contact.linkedin.href target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <LinkedinIcon size=20 class="footer-icon" />
                    </a>
                    <a href=contact.email.href aria-label="Email">
                        <MailIcon size=20 class="footer-icon" />
                    </a>
                </div>
            </div>
        </footer>
    }
}
