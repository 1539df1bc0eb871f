use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, page_query, request, send_empty, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_reports`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetReportsError {
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`get_my_reports`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetMyReportsError {
    Status401(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`get_report`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetReportError {
    Status404(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`post_report`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostReportError {
    Status422(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`post_vote`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostVoteError {
    Status403(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// List reports. Newest first.
pub async fn get_reports(
    configuration: &configuration::Configuration,
    page: Option<u32>,
    per_page: Option<u32>,
    filter: models::ReportFilter,
) -> Result<models::Page<models::Report>, Error<GetReportsError>> {
    let mut builder = request(configuration, Method::GET, "/api/reports");
    builder = page_query(builder, page, per_page);
    if let Some(status) = filter.status {
        builder = builder.query(&[("status", status.as_str())]);
    }
    if let Some(category) = filter.category {
        builder = builder.query(&[("category", category.as_str())]);
    }
    send_json(configuration, builder).await
}

/// List reports created by the current user.
pub async fn get_my_reports(
    configuration: &configuration::Configuration,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Result<models::Page<models::Report>, Error<GetMyReportsError>> {
    let builder = request(configuration, Method::GET, "/api/reports/mine");
    let builder = page_query(builder, page, per_page);
    send_json(configuration, builder).await
}

/// Get a single report. Vote counters and `user_vote` reflect
/// the requesting user.
pub async fn get_report(
    configuration: &configuration::Configuration,
    report_id: i64,
) -> Result<models::Report, Error<GetReportError>> {
    let path = format!("/api/reports/{report_id}");
    let builder = request(configuration, Method::GET, &path);
    send_json(configuration, builder).await
}

/// Create a new report.
pub async fn post_report(
    configuration: &configuration::Configuration,
    new_report: models::NewReport,
) -> Result<models::Report, Error<PostReportError>> {
    let builder = request(configuration, Method::POST, "/api/reports").json(&new_report);
    send_json(configuration, builder).await
}

/// Cast, switch or retract the vote of the current user. Sending the
/// same vote type as the current vote retracts it.
///
/// Response body is not used.
pub async fn post_vote(
    configuration: &configuration::Configuration,
    report_id: i64,
    vote_request: models::VoteRequest,
) -> Result<(), Error<PostVoteError>> {
    let path = format!("/api/reports/{report_id}/vote");
    let builder = request(configuration, Method::POST, &path).json(&vote_request);
    send_empty(configuration, builder).await
}
