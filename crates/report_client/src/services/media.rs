use api_client::{apis::media_api::get_report_media, models::MediaItem};
use error_stack::Result;
use model::ReportId;

use crate::{ApiClient, ClientError, client::ApiResultExt};

pub async fn list_report_media(
    api: &ApiClient,
    report_id: ReportId,
) -> Result<Vec<MediaItem>, ClientError> {
    get_report_media(api.api(), *report_id.as_i64())
        .await
        .api_request()
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, extract::Path, routing::get};
    use serde_json::json;

    use super::*;
    use crate::test_server::TestServer;

    #[tokio::test]
    async fn list_report_media_parses_analysis() {
        let router = Router::new().route(
            "/api/reports/{id}/media",
            get(|Path(id): Path<i64>| async move {
                Json(json!([
                    {
                        "id": 1,
                        "report_id": id,
                        "url": "https://cdn.example.com/1.jpg",
                        "content_type": "image/jpeg",
                        "analysis_summary": "Pothole, about 30 cm wide",
                        "created_at": "2024-05-01T10:00:00Z"
                    },
                    {
                        "id": 2,
                        "report_id": id,
                        "url": "https://cdn.example.com/2.png",
                        "content_type": "image/png",
                        "created_at": "2024-05-01T10:05:00Z"
                    }
                ]))
            }),
        );
        let server = TestServer::start(router).await;
        let media = list_report_media(&server.api, ReportId::new(7)).await.unwrap();
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].report_id, ReportId::new(7));
        assert_eq!(
            media[0].analysis_summary.as_deref(),
            Some("Pothole, about 30 cm wide")
        );
        assert_eq!(media[1].analysis_summary, None);
        assert_eq!(server.last_request().uri, "/api/reports/7/media");
    }
}
