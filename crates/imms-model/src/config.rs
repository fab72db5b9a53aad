//! Run configuration.
//!
//! Loaded once per run from a YAML document and read-only thereafter.

use serde::Deserialize;

/// Configuration document for a notice preparation run.
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeConfig {
    /// Expected dataset columns, in order. Validation compares the header
    /// row against this sequence exactly; a reordered column is a
    /// mismatch even when the sets agree.
    pub expected_columns: Vec<String>,

    /// Agent names excluded from received-event extraction.
    #[serde(default)]
    pub ignore_agents: Vec<String>,

    /// Reference date for the notice-level age and over-16 flag
    /// (`YYYY-MM-DD`).
    pub delivery_date: String,

    /// Date the extract was taken (`YYYY-MM-DD`). Informational only.
    pub data_date: String,
}

impl NoticeConfig {
    /// Membership test for the ignore list.
    pub fn is_ignored(&self, agent: &str) -> bool {
        self.ignore_agents.iter().any(|name| name == agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NoticeConfig {
        NoticeConfig {
            expected_columns: vec!["Client ID".to_string()],
            ignore_agents: vec!["Tuberculin PPD".to_string()],
            delivery_date: "2025-05-08".to_string(),
            data_date: "2025-04-01".to_string(),
        }
    }

    #[test]
    fn ignore_membership_is_exact() {
        let config = config();
        assert!(config.is_ignored("Tuberculin PPD"));
        assert!(!config.is_ignored("tuberculin ppd"));
        assert!(!config.is_ignored("Var"));
    }
}
