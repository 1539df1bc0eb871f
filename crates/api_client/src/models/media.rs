use chrono::{DateTime, Utc};
use model::{MediaId, ReportId};
use serde::{Deserialize, Serialize};

/// Image attached to a report. Upload happens elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub report_id: ReportId,
    pub url: String,
    pub content_type: String,
    /// Server side image analysis result, if analysis is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}
