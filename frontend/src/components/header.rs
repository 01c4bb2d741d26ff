use leptos::*;
use rand::Rng;

use leadboard_core::{Command, SAMPLE_ROSTER};

use crate::config;
use crate::dispatch::Dispatcher;

#[component]
pub fn Header() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let model = dispatcher.model();
    let updated_at = dispatcher.updated_at();

    let on_refresh = {
        let dispatcher = dispatcher.clone();
        move |_| {
            log::info!("🔄 Manual refresh requested");
            dispatcher.dispatch(Command::RefreshRequested);
        }
    };

    // The roster index is drawn here; everything after that is
    // deterministic in the model.
    let on_simulate = {
        let dispatcher = dispatcher.clone();
        move |_| {
            let roster_index = rand::thread_rng().gen_range(0..SAMPLE_ROSTER.len());
            log::info!("🧪 Injecting test lead (roster #{})", roster_index);
            dispatcher.dispatch(Command::SimulateRequested { roster_index });
        }
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{config::APP_NAME}</a>
                <span class="badge">
                    {move || match updated_at.get() {
                        Some(stamp) => format!("Updated {}", stamp),
                        None => "Loading...".to_string(),
                    }}
                </span>
            </div>
            <div class="header-right">
                <button class="btn btn-secondary" id="refreshBtn" on:click=on_refresh>
                    "Refresh"
                </button>
                <button
                    class="btn btn-primary"
                    id="simulateBtn"
                    on:click=on_simulate
                    disabled=move || model.with(|m| m.simulate_busy())
                >
                    {move || {
                        if model.with(|m| m.simulate_busy()) {
                            "Injecting..."
                        } else {
                            "Inject Test Lead"
                        }
                    }}
                </button>
            </div>
        </header>
    }
}
