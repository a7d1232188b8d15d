//! コンタクトセクション
//!
//! フォームは送信先を持たない。送信は抑止してコンソールに記録するだけ。

use leptos::prelude::*;
use portfolio_common::ContactInfo;
use crate::components::icons::{GithubIcon, LinkedinIcon, MailIcon};
use crate::dom;

#[component]
pub fn ContactSection(contact: ContactInfo) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dom::log("contact form submitted; no handler is configured");
    };

    view! {
        <div class="grid md-grid-cols-2 gap-8">
            <div>
                <p class="text-lg mb-6">{contact.intro}</p>
                <div class="flex flex-col space-y-4">
                    <div class="flex items-center space-x-3">
                        <MailIcon class="text-primary" />
                        <a href=contact.email.href class="hover-primary">{contact.email.label}</a>
                    </div>
                    <div class="flex items-center space-x-3">
                        <GithubIcon class="text-primary" />
                        <a
                            href=contact.github.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover-primary"
                        >
                            {contact.github.label}
                        </a>
                    </div>
                    <div class="flex items-center space-x-3">
                        <LinkedinIcon class="text-primary" />
                        <a
                            href=contact.linkedin.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover-primary"
                        >
                            {contact.linkedin.label}
                        </a>
                    </div>
                </div>
            </div>

            <div class="card p-6">
                <h3 class="text-xl font-semibold mb-4">"Send me a message"</h3>
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label for="name" class="form-label">"Name"</label>
                        <input type="text" id="name" class="form-input" placeholder="Your name" />
                    </div>
                    <div>
                        <label for="email" class="form-label">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form-input"
                            placeholder="your.email@example.com"
                        />
                    </div>
                    <div>
                        <label for="message" class="form-label">"Message"</label>
                        <textarea id="message" rows="4" class="form-input" placeholder="Your message"></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary w-full">"Send Message"</button>
                </form>
            </div>
        </div>
    }
}
