use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, request, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_current_user`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetCurrentUserError {
    Status401(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`put_current_user`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PutCurrentUserError {
    Status422(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

pub async fn get_current_user(
    configuration: &configuration::Configuration,
) -> Result<models::User, Error<GetCurrentUserError>> {
    let builder = request(configuration, Method::GET, "/api/users/me");
    send_json(configuration, builder).await
}

/// Update profile fields of the current user. Returns the updated user.
pub async fn put_current_user(
    configuration: &configuration::Configuration,
    update_user: models::UpdateUser,
) -> Result<models::User, Error<PutCurrentUserError>> {
    let builder = request(configuration, Method::PUT, "/api/users/me").json(&update_user);
    send_json(configuration, builder).await
}
