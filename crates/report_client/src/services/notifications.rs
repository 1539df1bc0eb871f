use api_client::{
    apis::notifications_api::{
        get_notifications, get_unread_count, post_mark_all_notifications_read,
        post_mark_notification_read,
    },
    models::{Notification, Page},
};
use error_stack::Result;
use model::NotificationId;

use super::PageRequest;
use crate::{ApiClient, ClientError, client::ApiResultExt};

pub async fn list_notifications(
    api: &ApiClient,
    page: PageRequest,
) -> Result<Page<Notification>, ClientError> {
    get_notifications(api.api(), Some(page.page), Some(page.per_page))
        .await
        .api_request()
}

pub async fn mark_read(api: &ApiClient, id: NotificationId) -> Result<(), ClientError> {
    post_mark_notification_read(api.api(), *id.as_i64())
        .await
        .api_request()
}

pub async fn mark_all_read(api: &ApiClient) -> Result<(), ClientError> {
    post_mark_all_notifications_read(api.api())
        .await
        .api_request()
}

pub async fn unread_count(api: &ApiClient) -> Result<u64, ClientError> {
    get_unread_count(api.api())
        .await
        .api_request()
        .map(|v| v.count)
}
