//! Access REST API from Rust

use api_client::apis::configuration::Configuration;
use config::Config;
use error_stack::{Result, ResultExt};
use reqwest::Client;
use tracing::info;
use url::Url;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ClientError {
    #[error("API request failed")]
    ApiRequest,

    #[error("HTTP client creation failed")]
    HttpClient,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Already logged in")]
    SessionAlreadyActive,

    #[error("Missing value")]
    MissingValue,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    #[track_caller]
    pub fn report(self) -> error_stack::Report<Self> {
        error_stack::Report::from(self)
    }
}

/// Attach HTTP status of failed API request to the error report.
pub(crate) trait ApiResultExt<T> {
    #[track_caller]
    fn api_request(self) -> Result<T, ClientError>;
}

impl<T, E> ApiResultExt<T> for std::result::Result<T, api_client::apis::Error<E>>
where
    api_client::apis::Error<E>: error_stack::Context,
{
    fn api_request(self) -> Result<T, ClientError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => {
                let status = e.status();
                let result = Err(e).change_context(ClientError::ApiRequest);
                match status {
                    Some(status) => result.attach_printable(format!("HTTP status: {status}")),
                    None => result,
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    api: Configuration,
}

impl ApiClient {
    pub fn new(base_url: &Url, client: &Client) -> Self {
        Self {
            api: Self::create_configuration(client, base_url.as_str()),
        }
    }

    /// Create client with timeout and user agent from config.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .change_context(ClientError::HttpClient)?;
        let mut api_client = Self::new(config.api_url(), &client);
        if let Some(user_agent) = config.user_agent() {
            api_client.api.user_agent = Some(user_agent.to_string());
        }
        Ok(api_client)
    }

    fn create_configuration(client: &Client, base_url: &str) -> Configuration {
        let path = base_url.trim_end_matches('/').to_string();
        Configuration {
            base_path: path,
            client: client.clone(),
            ..Configuration::default()
        }
    }

    pub fn print_to_log(&self) {
        info!("API base url: {}", self.api.base_path);
    }

    pub fn api(&self) -> &Configuration {
        &self.api
    }

    pub(crate) fn set_access_token(&mut self, token: String) {
        self.api.bearer_access_token = Some(token);
    }

    pub(crate) fn clear_access_token(&mut self) {
        self.api.bearer_access_token = None;
    }

    pub fn is_access_token_available(&self) -> bool {
        self.api.bearer_access_token.is_some()
    }
}
