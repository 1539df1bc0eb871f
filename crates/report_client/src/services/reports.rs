use api_client::{
    apis::reports_api::{get_my_reports, get_report, get_reports, post_report, post_vote},
    models::{NewReport, Page, Report, ReportFilter, VoteRequest},
};
use error_stack::Result;
use model::{ReportId, VoteIntent};

use super::PageRequest;
use crate::{ApiClient, ClientError, client::ApiResultExt};

pub const MAX_TITLE_LENGTH: usize = 200;

pub async fn list_reports(
    api: &ApiClient,
    page: PageRequest,
    filter: ReportFilter,
) -> Result<Page<Report>, ClientError> {
    get_reports(api.api(), Some(page.page), Some(page.per_page), filter)
        .await
        .api_request()
}

pub async fn list_my_reports(
    api: &ApiClient,
    page: PageRequest,
) -> Result<Page<Report>, ClientError> {
    get_my_reports(api.api(), Some(page.page), Some(page.per_page))
        .await
        .api_request()
}

pub async fn report(api: &ApiClient, id: ReportId) -> Result<Report, ClientError> {
    get_report(api.api(), *id.as_i64()).await.api_request()
}

pub async fn create_report(api: &ApiClient, new_report: NewReport) -> Result<Report, ClientError> {
    validate_new_report(&new_report)?;
    post_report(api.api(), new_report).await.api_request()
}

fn validate_new_report(new_report: &NewReport) -> Result<(), ClientError> {
    let title_length = new_report.title.trim().chars().count();
    if title_length == 0 {
        return Err(ClientError::InvalidInput("title is empty".to_string()).report());
    }
    if title_length > MAX_TITLE_LENGTH {
        return Err(ClientError::InvalidInput(format!(
            "title is longer than {MAX_TITLE_LENGTH} characters"
        ))
        .report());
    }
    if !(-90.0..=90.0).contains(&new_report.latitude) {
        return Err(ClientError::InvalidInput("latitude out of range".to_string()).report());
    }
    if !(-180.0..=180.0).contains(&new_report.longitude) {
        return Err(ClientError::InvalidInput("longitude out of range".to_string()).report());
    }
    Ok(())
}

/// Send one vote tap to the server. The server applies the same
/// retract/switch/add rules as the local vote state.
pub async fn submit_vote(
    api: &ApiClient,
    report_id: ReportId,
    intent: VoteIntent,
) -> Result<(), ClientError> {
    post_vote(api.api(), *report_id.as_i64(), VoteRequest::new(intent))
        .await
        .api_request()
}
