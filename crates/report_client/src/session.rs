//! Login state of the client.
//!
//! The session is created at startup, gets the access token at login and
//! loses it at logout. Code which needs the token receives the session or
//! its [ApiClient] as an argument.

use api_client::models::User;
use error_stack::{Result, ResultExt};
use tracing::{info, warn};

use crate::{ApiClient, ClientError, services};

#[derive(Debug)]
pub struct Session {
    api: ApiClient,
    user: Option<User>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self { api, user: None }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.is_access_token_available()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, ClientError> {
        if self.is_logged_in() {
            return Err(ClientError::SessionAlreadyActive.report());
        }

        let response = services::auth::login(&self.api, email, password).await?;
        if response.access_token.is_empty() {
            return Err(ClientError::MissingValue.report())
                .attach_printable("Empty access token");
        }

        self.api.set_access_token(response.access_token);
        info!("Logged in as user {}", response.user.id);
        Ok(self.user.insert(response.user))
    }

    /// Local login state is cleared even if the server request fails.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        if !self.is_logged_in() {
            return Err(ClientError::NotLoggedIn.report());
        }

        let result = services::auth::logout(&self.api).await;
        self.api.clear_access_token();
        self.user = None;

        if let Err(e) = &result {
            warn!("Logout request failed: {:?}", e);
        }
        result
    }
}
