use api_client::{
    apis::auth_api::{post_login, post_logout},
    models::{LoginRequest, LoginResponse},
};
use error_stack::Result;

use crate::{ApiClient, ClientError, client::ApiResultExt};

pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ClientError> {
    post_login(
        api.api(),
        LoginRequest::new(email.to_string(), password.to_string()),
    )
    .await
    .api_request()
}

pub async fn logout(api: &ApiClient) -> Result<(), ClientError> {
    post_logout(api.api()).await.api_request()
}
