use api_client::{
    apis::agencies_api::{get_agencies, get_agency},
    models::Agency,
};
use error_stack::Result;
use model::{AgencyId, ReportCategory};

use crate::{ApiClient, ClientError, client::ApiResultExt};

pub async fn list_agencies(api: &ApiClient) -> Result<Vec<Agency>, ClientError> {
    get_agencies(api.api()).await.api_request()
}

pub async fn agency(api: &ApiClient, id: AgencyId) -> Result<Agency, ClientError> {
    get_agency(api.api(), *id.as_i64()).await.api_request()
}

/// Agencies which handle reports of the category.
pub fn agencies_for_category(agencies: &[Agency], category: ReportCategory) -> Vec<&Agency> {
    agencies
        .iter()
        .filter(|a| a.categories.contains(&category))
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
    use serde_json::{Value, json};

    use super::*;
    use crate::test_server::TestServer;

    fn agency_json(id: i64, categories: Value) -> Value {
        json!({
            "id": id,
            "name": format!("Agency {id}"),
            "contact_email": "office@example.com",
            "categories": categories
        })
    }

    fn router() -> Router {
        Router::new()
            .route(
                "/api/agencies",
                get(|| async {
                    Json(json!([
                        agency_json(1, json!(["pothole", "traffic"])),
                        agency_json(2, json!(["streetlight", "hovercraft"])),
                    ]))
                }),
            )
            .route(
                "/api/agencies/{id}",
                get(|Path(id): Path<i64>| async move {
                    if id == 1 {
                        Ok(Json(agency_json(1, json!(["pothole"]))))
                    } else {
                        Err(StatusCode::NOT_FOUND)
                    }
                }),
            )
    }

    #[tokio::test]
    async fn agencies_for_created_report_category() {
        let server = TestServer::start(router()).await;
        let agencies = list_agencies(&server.api).await.unwrap();
        assert_eq!(agencies[1].categories[1], ReportCategory::Other);

        let handling = agencies_for_category(&agencies, ReportCategory::Pothole);
        assert_eq!(handling.len(), 1);
        assert_eq!(handling[0].id, AgencyId::new(1));
        assert!(agencies_for_category(&agencies, ReportCategory::Garbage).is_empty());
    }

    #[tokio::test]
    async fn get_agency_by_id() {
        let server = TestServer::start(router()).await;
        let found = agency(&server.api, AgencyId::new(1)).await.unwrap();
        assert_eq!(found.name, "Agency 1");
        assert_eq!(server.last_request().uri, "/api/agencies/1");

        let error = agency(&server.api, AgencyId::new(2)).await.unwrap_err();
        assert_eq!(error.current_context(), &ClientError::ApiRequest);
    }
}
