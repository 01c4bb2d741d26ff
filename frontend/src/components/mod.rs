//! UI Components for the Leadboard dashboard.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Top bar with the refresh and lead-injection controls
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`MetricsSection`] - Aggregate outreach counters
//! - [`QueueSection`] - Review queue with per-lead and batch approval

mod header;
mod hero;
mod metrics;
mod queue;
mod footer;

pub use header::*;
pub use hero::*;
pub use metrics::*;
pub use queue::*;
pub use footer::*;
