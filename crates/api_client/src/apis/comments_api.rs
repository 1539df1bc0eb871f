use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, page_query, request, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_comments`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetCommentsError {
    Status404(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`post_comment`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostCommentError {
    Status422(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// List comments of a report. Oldest first.
pub async fn get_comments(
    configuration: &configuration::Configuration,
    report_id: i64,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Result<models::Page<models::Comment>, Error<GetCommentsError>> {
    let path = format!("/api/reports/{report_id}/comments");
    let builder = request(configuration, Method::GET, &path);
    let builder = page_query(builder, page, per_page);
    send_json(configuration, builder).await
}

pub async fn post_comment(
    configuration: &configuration::Configuration,
    report_id: i64,
    new_comment: models::NewComment,
) -> Result<models::Comment, Error<PostCommentError>> {
    let path = format!("/api/reports/{report_id}/comments");
    let builder = request(configuration, Method::POST, &path).json(&new_comment);
    send_json(configuration, builder).await
}
