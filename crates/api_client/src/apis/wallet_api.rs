use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{configuration, page_query, request, send_json, Error};
use crate::models;

/// struct for typed errors of method [`get_wallet`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetWalletError {
    Status401(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

/// struct for typed errors of method [`get_wallet_transactions`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetWalletTransactionsError {
    Status401(models::ErrorBody),
    UnknownValue(serde_json::Value),
}

pub async fn get_wallet(
    configuration: &configuration::Configuration,
) -> Result<models::Wallet, Error<GetWalletError>> {
    let builder = request(configuration, Method::GET, "/api/wallet");
    send_json(configuration, builder).await
}

/// Point history of the current user. Newest first.
pub async fn get_wallet_transactions(
    configuration: &configuration::Configuration,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Result<models::Page<models::WalletTransaction>, Error<GetWalletTransactionsError>> {
    let builder = request(configuration, Method::GET, "/api/wallet/transactions");
    let builder = page_query(builder, page, per_page);
    send_json(configuration, builder).await
}
