use api_client::{apis::stats_api::get_stats_summary, models::StatsSummary};
use error_stack::Result;

use crate::{ApiClient, ClientError, client::ApiResultExt};

pub async fn summary(api: &ApiClient) -> Result<StatsSummary, ClientError> {
    get_stats_summary(api.api()).await.api_request()
}
