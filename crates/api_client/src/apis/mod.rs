use std::{error, fmt};

use serde::de::DeserializeOwned;

use self::configuration::Configuration;

#[derive(Debug, Clone)]
pub struct ResponseContent<T> {
    pub status: reqwest::StatusCode,
    pub content: String,
    pub entity: Option<T>,
}

#[derive(Debug)]
pub enum Error<T> {
    Reqwest(reqwest::Error),
    Serde(serde_json::Error),
    Io(std::io::Error),
    ResponseError(ResponseContent<T>),
}

impl<T> Error<T> {
    /// HTTP status if the server responded with an error status.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::ResponseError(e) => Some(e.status),
            Error::Reqwest(e) => e.status(),
            Error::Serde(_) | Error::Io(_) => None,
        }
    }
}

impl<T> fmt::Display for Error<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (module, e) = match self {
            Error::Reqwest(e) => ("reqwest", e.to_string()),
            Error::Serde(e) => ("serde", e.to_string()),
            Error::Io(e) => ("IO", e.to_string()),
            Error::ResponseError(e) => ("response", format!("status code {}", e.status)),
        };
        write!(f, "error in {}: {}", module, e)
    }
}

impl<T: fmt::Debug> error::Error for Error<T> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(match self {
            Error::Reqwest(e) => e,
            Error::Serde(e) => e,
            Error::Io(e) => e,
            Error::ResponseError(_) => return None,
        })
    }
}

impl<T> From<reqwest::Error> for Error<T> {
    fn from(e: reqwest::Error) -> Self {
        Error::Reqwest(e)
    }
}

impl<T> From<serde_json::Error> for Error<T> {
    fn from(e: serde_json::Error) -> Self {
        Error::Serde(e)
    }
}

impl<T> From<std::io::Error> for Error<T> {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Request builder with base path, user agent and access token applied.
pub(crate) fn request(
    configuration: &Configuration,
    method: reqwest::Method,
    path: &str,
) -> reqwest::RequestBuilder {
    let uri = format!("{}{}", configuration.base_path, path);
    let mut builder = configuration.client.request(method, uri.as_str());

    if let Some(ref user_agent) = configuration.user_agent {
        builder = builder.header(reqwest::header::USER_AGENT, user_agent.clone());
    }
    if let Some(ref token) = configuration.bearer_access_token {
        builder = builder.bearer_auth(token.to_owned());
    }
    builder
}

/// Page query parameters. Pages start from 1.
pub(crate) fn page_query(
    builder: reqwest::RequestBuilder,
    page: Option<u32>,
    per_page: Option<u32>,
) -> reqwest::RequestBuilder {
    let mut builder = builder;
    if let Some(page) = page {
        builder = builder.query(&[("page", &page.to_string())]);
    }
    if let Some(per_page) = per_page {
        builder = builder.query(&[("per_page", &per_page.to_string())]);
    }
    builder
}

async fn execute<E: DeserializeOwned>(
    configuration: &Configuration,
    builder: reqwest::RequestBuilder,
) -> Result<String, Error<E>> {
    let req = builder.build()?;
    let resp = configuration.client.execute(req).await?;

    let status = resp.status();
    let content = resp.text().await?;

    if !status.is_client_error() && !status.is_server_error() {
        Ok(content)
    } else {
        let entity: Option<E> = serde_json::from_str(&content).ok();
        Err(Error::ResponseError(ResponseContent {
            status,
            content,
            entity,
        }))
    }
}

/// Send request and parse JSON response body.
pub(crate) async fn send_json<R: DeserializeOwned, E: DeserializeOwned>(
    configuration: &Configuration,
    builder: reqwest::RequestBuilder,
) -> Result<R, Error<E>> {
    let content = execute(configuration, builder).await?;
    serde_json::from_str(&content).map_err(Error::from)
}

/// Send request and ignore response body.
pub(crate) async fn send_empty<E: DeserializeOwned>(
    configuration: &Configuration,
    builder: reqwest::RequestBuilder,
) -> Result<(), Error<E>> {
    execute(configuration, builder).await.map(|_| ())
}

pub mod agencies_api;
pub mod auth_api;
pub mod comments_api;
pub mod media_api;
pub mod notifications_api;
pub mod reports_api;
pub mod stats_api;
pub mod users_api;
pub mod wallet_api;

pub mod configuration;
