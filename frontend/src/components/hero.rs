//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Outbound Lead Review"</h1>
            <p class="subtitle">
                "Every AI-drafted outreach email waits here for a human decision. "
                "Edit the copy, approve leads one by one or in batch; nothing is sent without you."
            </p>
        </div>
    }
}
