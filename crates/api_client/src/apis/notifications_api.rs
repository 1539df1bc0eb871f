use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, page_query, request, send_empty, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_notifications`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetNotificationsError {
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`post_mark_notification_read`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostMarkNotificationReadError {
    Status404(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`post_mark_all_notifications_read`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostMarkAllNotificationsReadError {
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`get_unread_count`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetUnreadCountError {
    UnknownValue(serde_json::Value),
}

pub async fn get_notifications(
    configuration: &configuration::Configuration,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Result<models::Page<models::Notification>, Error<GetNotificationsError>> {
    let builder = request(configuration, Method::GET, "/api/notifications");
    let builder = page_query(builder, page, per_page);
    send_json(configuration, builder).await
}

pub async fn post_mark_notification_read(
    configuration: &configuration::Configuration,
    notification_id: i64,
) -> Result<(), Error<PostMarkNotificationReadError>> {
    let path = format!("/api/notifications/{notification_id}/read");
    let builder = request(configuration, Method::POST, &path);
    send_empty(configuration, builder).await
}

pub async fn post_mark_all_notifications_read(
    configuration: &configuration::Configuration,
) -> Result<(), Error<PostMarkAllNotificationsReadError>> {
    let builder = request(configuration, Method::POST, "/api/notifications/read-all");
    send_empty(configuration, builder).await
}

pub async fn get_unread_count(
    configuration: &configuration::Configuration,
) -> Result<models::UnreadCount, Error<GetUnreadCountError>> {
    let builder = request(configuration, Method::GET, "/api/notifications/unread-count");
    send_json(configuration, builder).await
}
