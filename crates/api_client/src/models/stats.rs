use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_reports: u64,
    pub resolved_reports: u64,
    pub in_progress_reports: u64,
    pub pending_reports: u64,
    /// Value from 0.0 to 1.0
    pub resolution_rate: f64,
}
