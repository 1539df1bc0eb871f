use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, request, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_agencies`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetAgenciesError {
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`get_agency`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetAgencyError {
    Status404(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

pub async fn get_agencies(
    configuration: &configuration::Configuration,
) -> Result<Vec<models::Agency>, Error<GetAgenciesError>> {
    let builder = request(configuration, Method::GET, "/api/agencies");
    send_json(configuration, builder).await
}

pub async fn get_agency(
    configuration: &configuration::Configuration,
    agency_id: i64,
) -> Result<models::Agency, Error<GetAgencyError>> {
    let path = format!("/api/agencies/{agency_id}");
    let builder = request(configuration, Method::GET, &path);
    send_json(configuration, builder).await
}
