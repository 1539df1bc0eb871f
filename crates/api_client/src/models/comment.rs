use chrono::{DateTime, Utc};
use model::{CommentId, ReportId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub report_id: ReportId,
    pub user_id: UserId,
    /// Display name of the author
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    pub fn new(content: String) -> NewComment {
        NewComment { content }
    }
}
