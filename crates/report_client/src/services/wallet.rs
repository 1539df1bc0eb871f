use api_client::{
    apis::wallet_api::{get_wallet, get_wallet_transactions},
    models::{Page, Wallet, WalletTransaction},
};
use error_stack::Result;

use super::PageRequest;
use crate::{ApiClient, ClientError, client::ApiResultExt};

pub async fn wallet(api: &ApiClient) -> Result<Wallet, ClientError> {
    get_wallet(api.api()).await.api_request()
}

pub async fn transactions(
    api: &ApiClient,
    page: PageRequest,
) -> Result<Page<WalletTransaction>, ClientError> {
    get_wallet_transactions(api.api(), Some(page.page), Some(page.per_page))
        .await
        .api_request()
}
