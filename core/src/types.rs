//! Wire types for the backend contract.
//!
//! This module centralizes every JSON shape the dashboard exchanges with
//! the lead backend, so the API client and the view-model speak the same
//! language.
//!
//! # Categories
//!
//! - **Lead Types** - lead records and their opaque review status
//! - **Metrics Types** - aggregate outreach counters (display-only)
//! - **Log Types** - per-lead activity entries
//! - **Request/Response Types** - payloads for the mutating endpoints

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Lead Types
// =============================================================================

/// Review status of a lead as reported by the backend.
///
/// The status vocabulary is owned by the backend and open-ended: observed
/// values include `new`, `enriched`, `processed`, `sent_step0`,
/// `replied_interested`, `stopped_bounce`. The dashboard never matches on
/// the full set; it keeps the raw string and only asks the questions
/// below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadStatus(String);

impl LeadStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Drafted by the backend and waiting for operator review.
    ///
    /// The review queue is exactly the leads for which this holds.
    pub fn is_processed(&self) -> bool {
        self.0 == "processed"
    }

    /// Coarse grouping for badge styling.
    pub fn family(&self) -> StatusFamily {
        if self.0 == "processed" {
            StatusFamily::Processed
        } else if self.0 == "new" || self.0 == "enriched" {
            StatusFamily::New
        } else if self.0.starts_with("sent") {
            StatusFamily::Sent
        } else if self.0.starts_with("replied") {
            StatusFamily::Replied
        } else if self.0.starts_with("stopped") {
            StatusFamily::Stopped
        } else {
            StatusFamily::Other
        }
    }
}

impl From<&str> for LeadStatus {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Display family of a [`LeadStatus`].
///
/// Grouping is by prefix because the backend appends suffixes within a
/// family (`sent_step0`, `replied_interested`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFamily {
    /// Ingested or enriched, not yet drafted.
    New,
    /// Drafted, waiting for review.
    Processed,
    /// Outreach email has gone out.
    Sent,
    /// The lead wrote back.
    Replied,
    /// Sequence stopped (bounce, unsubscribe).
    Stopped,
    /// Anything the backend invents later.
    Other,
}

impl StatusFamily {
    /// CSS class for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusFamily::New => "status-new",
            StatusFamily::Processed => "status-processed",
            StatusFamily::Sent => "status-sent",
            StatusFamily::Replied => "status-replied",
            StatusFamily::Stopped => "status-stopped",
            StatusFamily::Other => "status-other",
        }
    }
}

/// A lead record as returned by `GET /leads`.
///
/// `subject` and `body` are the AI-drafted email and are absent until the
/// backend's drafting pipeline has run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub status: LeadStatus,
}

/// Payload for `POST /leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub company: String,
    pub email: String,
    pub source: String,
}

/// Acknowledgement returned by `POST /leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedLead {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

// =============================================================================
// Metrics Types
// =============================================================================

/// Aggregate outreach counters from `GET /metrics`.
///
/// Computed and owned by the backend; the dashboard only displays them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub sent: u32,
    #[serde(default)]
    pub replied: u32,
    #[serde(default)]
    pub positive: u32,
}

impl Metrics {
    /// Reply rate as the metrics card prints it: `replied/sent` as a
    /// percentage rounded to one decimal when anything was sent, `"0%"`
    /// otherwise.
    pub fn reply_rate_percent(&self) -> String {
        if self.sent == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", self.replied as f64 * 100.0 / self.sent as f64)
        }
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// One activity-log line for a lead, from `GET /leads/{id}/logs`.
///
/// The event vocabulary (`INGEST`, `GEN_EMAIL`, `SEND_OK`, ...) is owned
/// by the backend and shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: String,
    pub event: String,
    #[serde(default)]
    pub details: String,
}

/// Renders a lead's log entries as the single human-readable block the
/// logs dialog shows.
pub fn format_log_block(lead_name: &str, entries: &[LogEntry]) -> String {
    let mut block = format!("Activity for {}", lead_name);
    if entries.is_empty() {
        block.push_str("\n\n(no events recorded)");
        return block;
    }
    for entry in entries {
        block.push('\n');
        block.push_str(&format!("[{}] {}", entry.time, entry.event));
        if !entry.details.is_empty() {
            block.push_str(&format!(": {}", entry.details));
        }
    }
    block
}

// =============================================================================
// Batch Approval Types
// =============================================================================

/// Body of `POST /leads/batch-approve`.
///
/// `lead_ids` is an ascending snapshot of the selection; `overrides`
/// carries operator edits keyed by lead id. A `BTreeMap` keeps the
/// serialized form deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub lead_ids: Vec<String>,
    pub overrides: BTreeMap<String, BodyOverride>,
}

/// Operator edit applied to one lead during batch approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyOverride {
    pub body: String,
}

/// Result object of `POST /leads/batch-approve`.
///
/// The backend owns this shape and it has not been pinned down, so every
/// field is optional and the dashboard only ever logs it; flow control
/// uses the HTTP status alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchOutcome {
    pub approved: Option<u32>,
    pub failed: Option<u32>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_deserialization() {
        let json = r#"{
            "id": "8f14e45f-ceea-4a1b-9a6d-3dba6cb0a2c1",
            "name": "Emily Chen",
            "company": "CloudScale AI",
            "email": "contact@cloudscaleai.com",
            "subject": "Scaling your ingestion pipeline",
            "body": "Hi Emily, ...",
            "status": "processed"
        }"#;

        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.name, "Emily Chen");
        assert!(lead.status.is_processed());
        assert_eq!(lead.status.as_str(), "processed");
    }

    #[test]
    fn test_lead_tolerates_missing_draft_fields() {
        // Freshly ingested leads have no email draft yet.
        let json = r#"{"id": "1", "name": "A", "company": "B", "status": "new"}"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.subject, None);
        assert_eq!(lead.body, None);
        assert_eq!(lead.email, None);
    }

    #[test]
    fn test_status_families() {
        assert_eq!(LeadStatus::from("new").family(), StatusFamily::New);
        assert_eq!(LeadStatus::from("enriched").family(), StatusFamily::New);
        assert_eq!(
            LeadStatus::from("processed").family(),
            StatusFamily::Processed
        );
        assert_eq!(LeadStatus::from("sent").family(), StatusFamily::Sent);
        assert_eq!(LeadStatus::from("sent_step0").family(), StatusFamily::Sent);
        assert_eq!(
            LeadStatus::from("replied_interested").family(),
            StatusFamily::Replied
        );
        assert_eq!(
            LeadStatus::from("stopped_bounce").family(),
            StatusFamily::Stopped
        );
        assert_eq!(
            LeadStatus::from("paused_manual").family(),
            StatusFamily::Other
        );
        assert!(!LeadStatus::from("sent").is_processed());
    }

    #[test]
    fn test_reply_rate_rounding() {
        let metrics = Metrics {
            sent: 10,
            replied: 3,
            positive: 1,
        };
        assert_eq!(metrics.reply_rate_percent(), "30.0%");

        let thirds = Metrics {
            sent: 3,
            replied: 1,
            positive: 0,
        };
        assert_eq!(thirds.reply_rate_percent(), "33.3%");

        let eighth = Metrics {
            sent: 8,
            replied: 1,
            positive: 0,
        };
        assert_eq!(eighth.reply_rate_percent(), "12.5%");
    }

    #[test]
    fn test_reply_rate_with_nothing_sent() {
        // Guard against division by zero: replies without sends still
        // print the bare zero form.
        let metrics = Metrics {
            sent: 0,
            replied: 5,
            positive: 2,
        };
        assert_eq!(metrics.reply_rate_percent(), "0%");
    }

    #[test]
    fn test_metrics_defaults_for_missing_counters() {
        let metrics: Metrics = serde_json::from_str(r#"{"sent": 4}"#).unwrap();
        assert_eq!(metrics.replied, 0);
        assert_eq!(metrics.positive, 0);
    }

    #[test]
    fn test_batch_request_wire_shape() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "1".to_string(),
            BodyOverride {
                body: "Edited body".to_string(),
            },
        );
        let request = BatchRequest {
            lead_ids: vec!["1".to_string(), "3".to_string()],
            overrides,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "lead_ids": ["1", "3"],
                "overrides": {"1": {"body": "Edited body"}}
            })
        );
    }

    #[test]
    fn test_batch_outcome_tolerates_any_shape() {
        let empty: BatchOutcome = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BatchOutcome::default());

        let partial: BatchOutcome =
            serde_json::from_str(r#"{"approved": 2, "extra_field": true}"#).unwrap();
        assert_eq!(partial.approved, Some(2));
        assert_eq!(partial.status, None);
    }

    #[test]
    fn test_log_block_formatting() {
        let entries = vec![
            LogEntry {
                time: "10:00:01".to_string(),
                event: "INGEST".to_string(),
                details: "Source: Web Simulation".to_string(),
            },
            LogEntry {
                time: "10:00:04".to_string(),
                event: "GEN_EMAIL".to_string(),
                details: String::new(),
            },
        ];

        let block = format_log_block("Emily Chen", &entries);
        assert_eq!(
            block,
            "Activity for Emily Chen\n[10:00:01] INGEST: Source: Web Simulation\n[10:00:04] GEN_EMAIL"
        );
    }

    #[test]
    fn test_log_block_with_no_entries() {
        let block = format_log_block("Emily Chen", &[]);
        assert_eq!(block, "Activity for Emily Chen\n\n(no events recorded)");
    }
}
