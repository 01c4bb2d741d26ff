//! Dashboard state and its view projections.
//!
//! [`Dashboard`] is the single source of truth for everything the page
//! shows: the lead cache from the last successful refresh, the aggregate
//! metrics, the operator's selection, body drafts, and per-row approve
//! progress. Components never reach into the model directly; they render
//! the projections ([`MetricsSummary`], [`QueueRow`]) which are pure
//! functions of the state and can be recomputed at any time with the
//! same result.

use std::collections::BTreeMap;

use crate::selection::Selection;
use crate::types::{BatchRequest, BodyOverride, Lead, Metrics};

// =============================================================================
// Dashboard Model
// =============================================================================

/// Everything the dashboard page knows, as plain data.
///
/// Mutated exclusively through [`Dashboard::apply`], so every state
/// change is an explicit, testable transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    /// Lead cache from the last successful refresh, in backend order.
    pub(crate) leads: Vec<Lead>,
    pub(crate) metrics: Metrics,
    /// Checked rows; survives refreshes, lives only as long as the page.
    pub(crate) selection: Selection,
    /// Operator-edited email bodies, keyed by lead id.
    pub(crate) drafts: BTreeMap<String, String>,
    /// Per-row approve progress, keyed by lead id. Absent means idle.
    pub(crate) approve_states: BTreeMap<String, ApproveState>,
    pub(crate) simulate_busy: bool,
    pub(crate) batch_busy: bool,
    /// Bumped on every successful refresh so rendered rows rebuild from
    /// server truth.
    pub(crate) refresh_epoch: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values for the four metric cards.
    pub fn metrics_summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_leads: self.leads.len(),
            sent: self.metrics.sent,
            reply_rate: self.metrics.reply_rate_percent(),
            positive: self.metrics.positive,
        }
    }

    /// One row per lead waiting for review, in backend order.
    pub fn queue_rows(&self) -> Vec<QueueRow> {
        self.leads
            .iter()
            .filter(|lead| lead.status.is_processed())
            .map(|lead| QueueRow {
                id: lead.id.clone(),
                name: lead.name.clone(),
                company: lead.company.clone(),
                email: lead.email.clone(),
                subject: lead.subject.clone().unwrap_or_default(),
                body: self.draft_for(lead),
                status_label: lead.status.as_str().to_string(),
                status_class: lead.status.family().css_class(),
                checked: self.selection.contains(&lead.id),
                approve: self.approve_state(&lead.id),
                epoch: self.refresh_epoch,
            })
            .collect()
    }

    /// True when no lead is waiting for review (the queue shows its
    /// empty-state message instead of rows).
    pub fn is_queue_empty(&self) -> bool {
        !self.leads.iter().any(|lead| lead.status.is_processed())
    }

    /// Count shown in the batch-action bar, or `None` when the bar is
    /// hidden. The bar shows iff the queue and the selection are both
    /// non-empty.
    pub fn batch_bar(&self) -> Option<usize> {
        if self.is_queue_empty() || self.selection.is_empty() {
            None
        } else {
            Some(self.selection.len())
        }
    }

    /// Whether a simulated lead is being injected or settling.
    pub fn simulate_busy(&self) -> bool {
        self.simulate_busy
    }

    /// Whether a batch approval is in flight.
    pub fn batch_busy(&self) -> bool {
        self.batch_busy
    }

    pub(crate) fn lead(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    pub(crate) fn approve_state(&self, id: &str) -> ApproveState {
        self.approve_states.get(id).copied().unwrap_or_default()
    }

    /// Current textarea content for a row: the operator's draft when one
    /// exists, otherwise the generated body.
    fn draft_for(&self, lead: &Lead) -> String {
        self.drafts
            .get(&lead.id)
            .cloned()
            .or_else(|| lead.body.clone())
            .unwrap_or_default()
    }

    /// Builds the batch payload from the current selection and drafts.
    ///
    /// An override is included only when the operator's draft differs
    /// from the body the backend generated; untouched rows send their id
    /// alone. Selected ids that have left the queue are kept in
    /// `lead_ids` and left for the backend to arbitrate.
    pub(crate) fn batch_request(&self) -> BatchRequest {
        let lead_ids = self.selection.ids();
        let mut overrides = BTreeMap::new();
        for id in &lead_ids {
            if let (Some(draft), Some(lead)) = (self.drafts.get(id), self.lead(id)) {
                if lead.body.as_deref() != Some(draft.as_str()) {
                    overrides.insert(
                        id.clone(),
                        BodyOverride {
                            body: draft.clone(),
                        },
                    );
                }
            }
        }
        BatchRequest {
            lead_ids,
            overrides,
        }
    }
}

// =============================================================================
// View Projections
// =============================================================================

/// Values for the four metric cards, ready to print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsSummary {
    pub total_leads: usize,
    pub sent: u32,
    pub reply_rate: String,
    pub positive: u32,
}

/// One rendered row of the review queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueRow {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: Option<String>,
    /// Draft subject line; empty when the backend has not produced one.
    pub subject: String,
    /// Current textarea content: the operator's draft if any, else the
    /// generated body, else empty (the placeholder shows through).
    pub body: String,
    /// Raw status string, shown in the row badge.
    pub status_label: String,
    /// Badge CSS class, from the status family.
    pub status_class: &'static str,
    pub checked: bool,
    pub approve: ApproveState,
    /// Data generation this row was built from.
    pub epoch: u64,
}

impl QueueRow {
    /// Identity for keyed list rendering.
    ///
    /// Captures everything that must rebuild the row's DOM when it
    /// changes. Body edits are deliberately absent: while the operator
    /// types, the textarea already holds the text, and rebuilding would
    /// steal its focus.
    pub fn render_key(&self) -> (u64, String, bool, ApproveState) {
        (self.epoch, self.id.clone(), self.checked, self.approve)
    }
}

/// Lifecycle of a row's Approve button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApproveState {
    #[default]
    Idle,
    /// Request in flight; the button reads "Sending...".
    Sending,
    /// Accepted by the backend; the row stays faded and its button
    /// disabled until the next refresh drops it from the queue.
    Approved,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LeadStatus;

    fn lead(id: &str, name: &str, status: &str) -> Lead {
        Lead {
            id: id.to_string(),
            name: name.to_string(),
            company: format!("{} Inc", name),
            email: Some(format!("contact@{}.com", id)),
            subject: Some("Quick question".to_string()),
            body: Some(format!("Hi {}, ...", name)),
            status: LeadStatus::from(status),
        }
    }

    fn populated() -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.leads = vec![
            lead("1", "Emily", "processed"),
            lead("2", "Marcus", "sent_step0"),
            lead("3", "Sarah", "processed"),
        ];
        dashboard.metrics = Metrics {
            sent: 10,
            replied: 3,
            positive: 1,
        };
        dashboard
    }

    #[test]
    fn test_metric_cards() {
        let summary = populated().metrics_summary();
        assert_eq!(summary.total_leads, 3);
        assert_eq!(summary.sent, 10);
        assert_eq!(summary.reply_rate, "30.0%");
        assert_eq!(summary.positive, 1);
    }

    #[test]
    fn test_queue_keeps_backend_order_of_processed_leads() {
        let rows = populated().queue_rows();
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_queue_state() {
        let mut dashboard = Dashboard::new();
        assert!(dashboard.is_queue_empty());
        assert!(dashboard.queue_rows().is_empty());

        // Leads exist but none is waiting for review.
        dashboard.leads = vec![lead("2", "Marcus", "sent_step0")];
        assert!(dashboard.is_queue_empty());
    }

    #[test]
    fn test_batch_bar_needs_queue_and_selection() {
        let mut dashboard = populated();
        assert_eq!(dashboard.batch_bar(), None);

        dashboard.selection.toggle("1");
        dashboard.selection.toggle("3");
        assert_eq!(dashboard.batch_bar(), Some(2));

        // Checked ids alone do not show the bar once the queue drains.
        dashboard.leads.retain(|l| !l.status.is_processed());
        assert_eq!(dashboard.batch_bar(), None);
    }

    #[test]
    fn test_rows_reflect_selection_drafts_and_approve_state() {
        let mut dashboard = populated();
        dashboard.selection.toggle("3");
        dashboard
            .drafts
            .insert("1".to_string(), "Rewritten opener".to_string());
        dashboard
            .approve_states
            .insert("1".to_string(), ApproveState::Sending);

        let rows = dashboard.queue_rows();
        assert_eq!(rows[0].body, "Rewritten opener");
        assert_eq!(rows[0].approve, ApproveState::Sending);
        assert!(!rows[0].checked);

        assert_eq!(rows[1].body, "Hi Sarah, ...");
        assert_eq!(rows[1].approve, ApproveState::Idle);
        assert!(rows[1].checked);
    }

    #[test]
    fn test_row_without_generated_body_is_blank() {
        let mut dashboard = Dashboard::new();
        let mut bare = lead("9", "Ada", "processed");
        bare.subject = None;
        bare.body = None;
        dashboard.leads = vec![bare];

        let rows = dashboard.queue_rows();
        assert_eq!(rows[0].subject, "");
        assert_eq!(rows[0].body, "");
        assert_eq!(rows[0].status_class, "status-processed");
    }

    #[test]
    fn test_batch_request_includes_only_changed_bodies() {
        let mut dashboard = populated();
        dashboard.selection.toggle("3");
        dashboard.selection.toggle("1");
        dashboard
            .drafts
            .insert("1".to_string(), "Edited body".to_string());
        // A draft identical to the generated body is not an override.
        dashboard
            .drafts
            .insert("3".to_string(), "Hi Sarah, ...".to_string());

        let request = dashboard.batch_request();
        assert_eq!(request.lead_ids, vec!["1", "3"]);
        assert_eq!(request.overrides.len(), 1);
        assert_eq!(request.overrides["1"].body, "Edited body");
    }

    #[test]
    fn test_batch_request_keeps_stale_selected_ids() {
        let mut dashboard = populated();
        dashboard.selection.toggle("1");
        dashboard.selection.toggle("gone");

        let request = dashboard.batch_request();
        assert_eq!(request.lead_ids, vec!["1", "gone"]);
        assert!(request.overrides.is_empty());
    }

    #[test]
    fn test_render_key_ignores_body_edits() {
        let mut dashboard = populated();
        let before = dashboard.queue_rows()[0].render_key();
        dashboard
            .drafts
            .insert("1".to_string(), "typing...".to_string());
        let after = dashboard.queue_rows()[0].render_key();
        assert_eq!(before, after);
    }
}
