use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, request, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_stats_summary`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetStatsSummaryError {
    UnknownValue(serde_json::Value),
}

/// City wide report statistics. Does not require login.
pub async fn get_stats_summary(
    configuration: &configuration::Configuration,
) -> Result<models::StatsSummary, Error<GetStatsSummaryError>> {
    let builder = request(configuration, Method::GET, "/api/stats/summary");
    send_json(configuration, builder).await
}
