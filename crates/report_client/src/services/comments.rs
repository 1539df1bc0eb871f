use api_client::{
    apis::comments_api::{get_comments, post_comment},
    models::{Comment, NewComment, Page},
};
use error_stack::Result;
use model::ReportId;

use super::PageRequest;
use crate::{ApiClient, ClientError, client::ApiResultExt};

pub const MAX_COMMENT_LENGTH: usize = 1000;

pub async fn list_comments(
    api: &ApiClient,
    report_id: ReportId,
    page: PageRequest,
) -> Result<Page<Comment>, ClientError> {
    get_comments(
        api.api(),
        *report_id.as_i64(),
        Some(page.page),
        Some(page.per_page),
    )
    .await
    .api_request()
}

/// Post comment. Content is trimmed and must not be empty.
pub async fn add_comment(
    api: &ApiClient,
    report_id: ReportId,
    content: &str,
) -> Result<Comment, ClientError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ClientError::InvalidInput("comment is empty".to_string()).report());
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(ClientError::InvalidInput(format!(
            "comment is longer than {MAX_COMMENT_LENGTH} characters"
        ))
        .report());
    }
    post_comment(
        api.api(),
        *report_id.as_i64(),
        NewComment::new(content.to_string()),
    )
    .await
    .api_request()
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
    use serde_json::{Value, json};

    use super::*;
    use crate::test_server::TestServer;

    fn comment_json(id: i64, report_id: i64, content: &Value) -> Value {
        json!({
            "id": id,
            "report_id": report_id,
            "user_id": 1,
            "author_name": "Test Citizen",
            "content": content,
            "created_at": "2024-05-01T10:00:00Z"
        })
    }

    fn router() -> Router {
        Router::new().route(
            "/api/reports/{id}/comments",
            get(|Path(id): Path<i64>| async move {
                Json(json!({
                    "items": [comment_json(1, id, &json!("First"))],
                    "page": 2,
                    "per_page": 1,
                    "total": 2
                }))
            })
            .post(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                (StatusCode::CREATED, Json(comment_json(5, id, &body["content"])))
            }),
        )
    }

    #[tokio::test]
    async fn list_comments_sends_page() {
        let server = TestServer::start(router()).await;
        let page = list_comments(&server.api, ReportId::new(4), PageRequest::new(2, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(page.items[0].content, "First");
        assert_eq!(page.next_page(), None);
        assert_eq!(
            server.last_request().uri,
            "/api/reports/4/comments?page=2&per_page=1"
        );
    }

    #[tokio::test]
    async fn add_comment_sends_trimmed_content() {
        let server = TestServer::start(router()).await;
        let comment = add_comment(&server.api, ReportId::new(4), "  Still broken \n")
            .await
            .unwrap();
        assert_eq!(comment.content, "Still broken");
        let request = server.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.uri, "/api/reports/4/comments");
    }

    #[tokio::test]
    async fn invalid_comment_is_not_sent() {
        let server = TestServer::start(router()).await;

        let error = add_comment(&server.api, ReportId::new(4), " \t ")
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), ClientError::InvalidInput(_)));

        let too_long = "x".repeat(MAX_COMMENT_LENGTH + 1);
        let error = add_comment(&server.api, ReportId::new(4), &too_long)
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), ClientError::InvalidInput(_)));
        assert!(server.requests().is_empty());

        let longest = "x".repeat(MAX_COMMENT_LENGTH);
        assert!(add_comment(&server.api, ReportId::new(4), &longest).await.is_ok());
        assert_eq!(server.requests().len(), 1);
    }
}
