use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, request, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_report_media`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetReportMediaError {
    Status404(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// List images attached to a report.
pub async fn get_report_media(
    configuration: &configuration::Configuration,
    report_id: i64,
) -> Result<Vec<models::MediaItem>, Error<GetReportMediaError>> {
    let path = format!("/api/reports/{report_id}/media");
    let builder = request(configuration, Method::GET, &path);
    send_json(configuration, builder).await
}
