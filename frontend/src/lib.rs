//! Leadboard - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard for reviewing, editing and approving
//! AI-drafted outreach emails before anything goes out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (refresh, inject test lead)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── MetricsSection (four counters)                         │
//! │  └── QueueSection (batch bar, lead rows)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in one `leadboard_core::Dashboard` behind the
//! [`Dispatcher`]: components dispatch commands and render the model's
//! projections, nothing else.
//!
//! # Modules
//!
//! - [`components`] - UI components (Header, Metrics, Queue, etc.)
//! - [`dispatch`] - Command dispatch and effect execution
//! - [`services`] - Backend communication (REST client)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

use leadboard_core::Command;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod dispatch;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Dispatch
pub use dispatch::Dispatcher;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Leadboard - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One dispatcher per page; components reach it through context.
    let dispatcher = Dispatcher::new();
    provide_context(dispatcher.clone());

    // The first paint starts from an empty model; fill it right away.
    dispatcher.dispatch(Command::RefreshRequested);

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <MetricsSection/>
            <QueueSection/>
        </div>

        <Footer/>
    }
}
