use chrono::{DateTime, Utc};
use model::{AgencyId, ReportCategory, ReportId, ReportStatus, UserId, VoteIntent, VoteValue};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub status: ReportStatus,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<AgencyId>,
    #[serde(default)]
    pub upvote_count: i64,
    #[serde(default)]
    pub downvote_count: i64,
    /// Vote of the requesting user
    #[serde(default)]
    pub user_vote: VoteValue,
    #[serde(default)]
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub vote_type: VoteIntent,
}

impl VoteRequest {
    pub fn new(vote_type: VoteIntent) -> VoteRequest {
        VoteRequest { vote_type }
    }
}

/// Optional filters for report listing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReportFilter {
    pub status: Option<ReportStatus>,
    pub category: Option<ReportCategory>,
}
