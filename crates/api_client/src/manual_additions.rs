use model::VoteState;

use crate::models::{Page, Report};

impl Report {
    /// Vote counters and current user vote as the server reported them.
    pub fn vote_state(&self) -> VoteState {
        VoteState::new(self.upvote_count, self.downvote_count, self.user_vote)
    }

    pub fn is_votable(&self) -> bool {
        self.status.is_votable()
    }
}

impl<T> Page<T> {
    pub fn has_next_page(&self) -> bool {
        let shown = u64::from(self.page) * u64::from(self.per_page);
        shown < self.total
    }

    pub fn next_page(&self) -> Option<u32> {
        if self.has_next_page() {
            self.page.checked_add(1)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, per_page: u32, total: u64) -> Page<()> {
        Page {
            items: vec![],
            page,
            per_page,
            total,
        }
    }

    #[test]
    fn next_page_exists_until_total_is_reached() {
        assert_eq!(page(1, 20, 45).next_page(), Some(2));
        assert_eq!(page(2, 20, 45).next_page(), Some(3));
        assert_eq!(page(3, 20, 45).next_page(), None);
        assert_eq!(page(1, 20, 20).next_page(), None);
        assert_eq!(page(1, 20, 0).next_page(), None);
    }

    #[test]
    fn report_json_without_vote_fields_uses_defaults() {
        let json = r#"{
            "id": 7,
            "user_id": 3,
            "title": "Broken light",
            "description": "Dark street",
            "category": "streetlight",
            "status": "pending",
            "latitude": 60.1,
            "longitude": 24.9,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.vote_state(), VoteState::default());
        assert!(report.is_votable());
    }

    #[test]
    fn report_json_with_user_vote() {
        let json = r#"{
            "id": 7,
            "user_id": 3,
            "title": "Flooded underpass",
            "description": "",
            "category": "flooding",
            "status": "resolved",
            "latitude": 0.0,
            "longitude": 0.0,
            "upvote_count": 5,
            "downvote_count": 2,
            "user_vote": "downvote",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-02T10:00:00Z"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(
            report.vote_state(),
            VoteState::new(5, 2, model::VoteValue::Downvote)
        );
        assert!(!report.is_votable());
    }
}
