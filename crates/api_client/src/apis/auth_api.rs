use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, request, send_empty, send_json, Error};
use crate::models;

/// struct for typed errors of method [`post_login`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostLoginError {
    Status401(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`post_logout`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostLogoutError {
    UnknownValue(serde_json::Value),
}

/// Login with email and password. Returns access token which must be
/// sent as bearer token with other requests.
pub async fn post_login(
    configuration: &configuration::Configuration,
    login_request: models::LoginRequest,
) -> Result<models::LoginResponse, Error<PostLoginError>> {
    let builder = request(configuration, Method::POST, "/api/auth/login").json(&login_request);
    send_json(configuration, builder).await
}

/// Invalidate current access token.
pub async fn post_logout(
    configuration: &configuration::Configuration,
) -> Result<(), Error<PostLogoutError>> {
    let builder = request(configuration, Method::POST, "/api/auth/logout");
    send_empty(configuration, builder).await
}
