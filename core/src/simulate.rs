//! Synthetic leads for the demo injection control.
//!
//! The header's "Inject Test Lead" button posts a made-up lead so the
//! whole pipeline can be exercised without a real data source. Payload
//! construction is deterministic given a roster index; drawing the index
//! at random is the shell's job.

use crate::types::NewLead;

/// Fixed roster the injection control samples from.
pub const SAMPLE_ROSTER: [(&str, &str); 4] = [
    ("Emily Chen", "CloudScale AI"),
    ("Marcus Johnson", "NextGen Finance"),
    ("Sarah Miller", "HealthPlus"),
    ("David Wu", "DataFlow Inc"),
];

/// Source tag stamped on every simulated lead.
pub const SIMULATION_SOURCE: &str = "Web Simulation";

/// How long a freshly injected lead is given to run the backend's
/// enrichment and drafting pipeline before the dashboard re-fetches.
/// The backend exposes no completion signal to poll for.
pub const PROCESSING_SETTLE_MS: u32 = 2_000;

/// Builds the simulate payload for roster entry `index` (wraps around).
pub fn sample_lead(index: usize) -> NewLead {
    let (name, company) = SAMPLE_ROSTER[index % SAMPLE_ROSTER.len()];
    NewLead {
        name: name.to_string(),
        company: company.to_string(),
        email: synthetic_email(company),
        source: SIMULATION_SOURCE.to_string(),
    }
}

/// Contact address derived from the company name, lowercased with the
/// whitespace stripped.
fn synthetic_email(company: &str) -> String {
    let domain = company
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    format!("contact@{}.com", domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_derivation_strips_spaces_and_lowercases() {
        assert_eq!(sample_lead(0).email, "contact@cloudscaleai.com");
        assert_eq!(sample_lead(3).email, "contact@dataflowinc.com");
    }

    #[test]
    fn test_roster_index_wraps() {
        assert_eq!(sample_lead(4), sample_lead(0));
        assert_eq!(sample_lead(7).name, "David Wu");
    }

    #[test]
    fn test_simulated_leads_are_tagged() {
        assert_eq!(sample_lead(1).source, "Web Simulation");
    }
}
