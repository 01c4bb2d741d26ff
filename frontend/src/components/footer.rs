//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Leadboard • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a
                    href="https://github.com/leadboard/leadboard"
                    class="footer-link"
                    target="_blank"
                >
                    "GitHub"
                </a>
            </div>
        </footer>
    }
}
