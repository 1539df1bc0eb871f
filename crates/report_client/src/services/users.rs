use api_client::{
    apis::users_api::{get_current_user, put_current_user},
    models::{UpdateUser, User},
};
use error_stack::Result;

use crate::{ApiClient, ClientError, client::ApiResultExt};

pub async fn current_user(api: &ApiClient) -> Result<User, ClientError> {
    get_current_user(api.api()).await.api_request()
}

pub async fn update_current_user(
    api: &ApiClient,
    update: UpdateUser,
) -> Result<User, ClientError> {
    if update.full_name.is_none() && update.phone.is_none() {
        return Err(ClientError::InvalidInput("nothing to update".to_string()).report());
    }
    if update.full_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ClientError::InvalidInput("name is empty".to_string()).report());
    }
    put_current_user(api.api(), update).await.api_request()
}
