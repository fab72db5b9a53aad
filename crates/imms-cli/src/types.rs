use std::path::PathBuf;

use imms_model::NoticeSet;

/// Result of a prepare run, consumed by the summary printer.
#[derive(Debug)]
pub struct PrepareResult {
    pub delivery_date: String,
    /// Written document path; `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub rows: usize,
    pub notices: NoticeSet,
}

impl PrepareResult {
    /// Distinct school/site names across all notices.
    pub fn school_count(&self) -> usize {
        let mut schools: Vec<&str> = self
            .notices
            .values()
            .map(|notice| notice.school.as_str())
            .collect();
        schools.sort_unstable();
        schools.dedup();
        schools.len()
    }

    /// Total grouped received entries across all notices.
    pub fn group_count(&self) -> usize {
        self.notices
            .values()
            .map(|notice| notice.received.len())
            .sum()
    }
}
