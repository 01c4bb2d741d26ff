//! Commands and effects: the dashboard's transition function.
//!
//! Every user interaction and every async completion is a [`Command`].
//! [`Dashboard::apply`] consumes one command, mutates the model and
//! returns the [`Effect`]s the shell must execute (HTTP calls, alerts,
//! timers). Completions come back as further commands, so the whole
//! review workflow is a loop of pure, testable transitions around an IO
//! boundary the model itself never touches.

use crate::dashboard::{ApproveState, Dashboard};
use crate::simulate::{sample_lead, PROCESSING_SETTLE_MS};
use crate::types::{format_log_block, BatchRequest, Lead, LogEntry, Metrics, NewLead};

// =============================================================================
// Commands
// =============================================================================

/// Everything that can happen to the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Reload leads and metrics. Fired on page load, from the manual
    /// refresh control, after a batch approval, and once a simulated
    /// lead has settled.
    RefreshRequested,
    /// Both refresh fetches landed.
    Refreshed { leads: Vec<Lead>, metrics: Metrics },
    /// At least one refresh fetch failed; prior data stays on screen.
    RefreshFailed,
    /// Row checkbox clicked.
    SelectionToggled { id: String },
    /// Operator typed in a row's body textarea.
    BodyEdited { id: String, text: String },
    /// Inject-test-lead control clicked. The index picks from the
    /// sample roster; the shell draws it at random.
    SimulateRequested { roster_index: usize },
    /// The backend accepted the simulated lead.
    SimulateAccepted,
    /// The simulated lead was rejected or never arrived.
    SimulateFailed,
    /// Row Approve button clicked.
    ApproveRequested { id: String },
    ApproveSucceeded { id: String },
    ApproveFailed { id: String, message: String },
    /// Batch-bar button clicked.
    BatchRequested,
    BatchSucceeded,
    BatchFailed { message: String },
    /// Row Logs button clicked.
    LogsRequested { id: String },
    LogsLoaded { id: String, entries: Vec<LogEntry> },
    LogsFailed { message: String },
}

// =============================================================================
// Effects
// =============================================================================

/// Side effects a transition asks the shell to run.
///
/// The model performs no IO of its own; it hands these back from
/// [`Dashboard::apply`] and the shell feeds the outcomes in as new
/// [`Command`]s.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch leads and metrics concurrently, await both, then dispatch
    /// `Refreshed` or `RefreshFailed`.
    FetchAll,
    /// POST a simulated lead.
    CreateLead(NewLead),
    /// POST a single approval.
    Approve { id: String },
    /// POST the batch payload.
    BatchApprove(BatchRequest),
    /// GET a lead's activity log.
    FetchLogs { id: String },
    /// Raise a blocking alert.
    Alert { message: String },
    /// Wait `delay_ms`, then dispatch `RefreshRequested`.
    ScheduleRefresh { delay_ms: u32 },
}

// =============================================================================
// Transitions
// =============================================================================

impl Dashboard {
    /// Applies one command and returns the effects it requests.
    ///
    /// The model before and after, plus the returned effects, fully
    /// describe the transition; nothing else happens.
    pub fn apply(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::RefreshRequested => vec![Effect::FetchAll],
            Command::Refreshed { leads, metrics } => {
                self.leads = leads;
                self.metrics = metrics;
                // Row state resets to server truth; the operator's
                // selection is page-scoped and survives.
                self.drafts.clear();
                self.approve_states.clear();
                self.simulate_busy = false;
                self.refresh_epoch += 1;
                Vec::new()
            }
            Command::RefreshFailed => {
                self.simulate_busy = false;
                Vec::new()
            }

            Command::SelectionToggled { id } => {
                self.selection.toggle(&id);
                Vec::new()
            }
            Command::BodyEdited { id, text } => {
                self.drafts.insert(id, text);
                Vec::new()
            }

            Command::SimulateRequested { roster_index } => {
                if self.simulate_busy {
                    return Vec::new();
                }
                self.simulate_busy = true;
                vec![Effect::CreateLead(sample_lead(roster_index))]
            }
            Command::SimulateAccepted => {
                // Stay busy while the backend's pipeline runs; the
                // delayed refresh re-enables the control.
                vec![Effect::ScheduleRefresh {
                    delay_ms: PROCESSING_SETTLE_MS,
                }]
            }
            Command::SimulateFailed => {
                self.simulate_busy = false;
                Vec::new()
            }

            Command::ApproveRequested { id } => {
                if self.lead(&id).is_none() || self.approve_state(&id) != ApproveState::Idle {
                    return Vec::new();
                }
                self.approve_states
                    .insert(id.clone(), ApproveState::Sending);
                vec![Effect::Approve { id }]
            }
            Command::ApproveSucceeded { id } => {
                self.approve_states
                    .insert(id.clone(), ApproveState::Approved);
                self.selection.remove(&id);
                Vec::new()
            }
            Command::ApproveFailed { id, message } => {
                self.approve_states.remove(&id);
                vec![Effect::Alert {
                    message: format!("Failed to approve: {}", message),
                }]
            }

            Command::BatchRequested => {
                if self.selection.is_empty() || self.batch_busy {
                    return Vec::new();
                }
                self.batch_busy = true;
                vec![Effect::BatchApprove(self.batch_request())]
            }
            Command::BatchSucceeded => {
                self.batch_busy = false;
                self.selection.clear();
                vec![Effect::FetchAll]
            }
            Command::BatchFailed { message } => {
                self.batch_busy = false;
                vec![Effect::Alert {
                    message: format!("Batch approval failed: {}", message),
                }]
            }

            Command::LogsRequested { id } => vec![Effect::FetchLogs { id }],
            Command::LogsLoaded { id, entries } => {
                let name = self
                    .lead(&id)
                    .map(|lead| lead.name.clone())
                    .unwrap_or(id);
                vec![Effect::Alert {
                    message: format_log_block(&name, &entries),
                }]
            }
            Command::LogsFailed { message } => {
                vec![Effect::Alert {
                    message: format!("Failed to load logs: {}", message),
                }]
            }
        }
    }
}
