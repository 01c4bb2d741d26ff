//! Command dispatch: the loop between the pure model and the browser.
//!
//! [`Dispatcher`] owns the [`Dashboard`] behind a signal. Components call
//! [`Dispatcher::dispatch`] with a [`Command`]; the model transition runs
//! synchronously, then every returned [`Effect`] is executed here (HTTP
//! via the API client, alerts, the settle-delay timer) and its outcome
//! fed back in as the next command. All IO failures get a console line;
//! whether they also alert is the model's call.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use leadboard_core::{Command, Dashboard, Effect};

use crate::config;
use crate::services::ApiClient;

/// Routes commands through the model and runs the resulting effects.
#[derive(Clone)]
pub struct Dispatcher {
    model: RwSignal<Dashboard>,
    updated_at: RwSignal<Option<String>>,
    api: ApiClient,
}

impl Dispatcher {
    /// Must be called inside a reactive scope (a component body).
    pub fn new() -> Self {
        Self {
            model: create_rw_signal(Dashboard::new()),
            updated_at: create_rw_signal(None),
            api: ApiClient::new(config::BACKEND_URL),
        }
    }

    /// The dashboard model; components read their projections off this.
    pub fn model(&self) -> RwSignal<Dashboard> {
        self.model
    }

    /// Wall-clock time of the last successful refresh, `HH:MM:SS`.
    pub fn updated_at(&self) -> RwSignal<Option<String>> {
        self.updated_at
    }

    /// Feeds one command through the model and runs its effects.
    pub fn dispatch(&self, command: Command) {
        if matches!(command, Command::Refreshed { .. }) {
            let stamp = Local::now().format("%H:%M:%S").to_string();
            self.updated_at.set(Some(stamp));
        }

        let effects = self
            .model
            .try_update(|model| model.apply(command))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let this = self.clone();
        match effect {
            Effect::FetchAll => spawn_local(async move {
                let (leads, metrics) =
                    futures::join!(this.api.list_leads(), this.api.metrics());
                match (leads, metrics) {
                    (Ok(leads), Ok(metrics)) => {
                        log::debug!("📥 Refresh: {} leads", leads.len());
                        this.dispatch(Command::Refreshed { leads, metrics });
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        log::error!("❌ Refresh failed: {}", err);
                        this.dispatch(Command::RefreshFailed);
                    }
                }
            }),

            Effect::CreateLead(payload) => spawn_local(async move {
                match this.api.create_lead(&payload).await {
                    Ok(created) => {
                        log::info!("📥 Simulated lead accepted: {}", created.id);
                        this.dispatch(Command::SimulateAccepted);
                    }
                    Err(err) => {
                        log::error!("❌ Simulated lead rejected: {}", err);
                        this.dispatch(Command::SimulateFailed);
                    }
                }
            }),

            Effect::Approve { id } => spawn_local(async move {
                match this.api.approve_lead(&id).await {
                    Ok(()) => {
                        log::info!("✅ Lead {} approved", id);
                        this.dispatch(Command::ApproveSucceeded { id });
                    }
                    Err(err) => {
                        log::error!("❌ Approving lead {} failed: {}", id, err);
                        let message = err.to_string();
                        this.dispatch(Command::ApproveFailed { id, message });
                    }
                }
            }),

            Effect::BatchApprove(request) => spawn_local(async move {
                match this.api.batch_approve(&request).await {
                    Ok(outcome) => {
                        // The outcome shape is backend-owned; log it and
                        // let the follow-up refresh tell the real story.
                        log::info!(
                            "✅ Batch of {} accepted: {:?}",
                            request.lead_ids.len(),
                            outcome
                        );
                        this.dispatch(Command::BatchSucceeded);
                    }
                    Err(err) => {
                        log::error!("❌ Batch approval failed: {}", err);
                        this.dispatch(Command::BatchFailed {
                            message: err.to_string(),
                        });
                    }
                }
            }),

            Effect::FetchLogs { id } => spawn_local(async move {
                match this.api.logs(&id).await {
                    Ok(entries) => this.dispatch(Command::LogsLoaded { id, entries }),
                    Err(err) => {
                        log::error!("❌ Loading logs for lead {} failed: {}", id, err);
                        this.dispatch(Command::LogsFailed {
                            message: err.to_string(),
                        });
                    }
                }
            }),

            Effect::Alert { message } => {
                if let Some(window) = web_sys::window() {
                    _ = window.alert_with_message(&message);
                }
            }

            Effect::ScheduleRefresh { delay_ms } => spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                this.dispatch(Command::RefreshRequested);
            }),
        }
    }
}
