//! Leadboard core: the dashboard's state machine, wire types and view
//! projections, free of any DOM or WASM dependency.
//!
//! The browser frontend owns exactly one [`Dashboard`] value, feeds it
//! [`Command`]s and executes the [`Effect`]s that come back. Everything
//! in this crate is plain data and pure functions, so the whole review
//! workflow is testable with an ordinary `cargo test` on the host.

mod command;
mod dashboard;
mod selection;
mod simulate;
mod types;

pub use command::{Command, Effect};
pub use dashboard::{ApproveState, Dashboard, MetricsSummary, QueueRow};
pub use selection::Selection;
pub use simulate::{sample_lead, PROCESSING_SETTLE_MS, SAMPLE_ROSTER, SIMULATION_SOURCE};
pub use types::{
    format_log_block, BatchOutcome, BatchRequest, BodyOverride, CreatedLead, Lead, LeadStatus,
    LogEntry, Metrics, NewLead, StatusFamily,
};
