//! Admin authentication
//!
//! Exchanges admin credentials for a session token.

use serde::Serialize;
use std::fmt;
use tracing::{debug, error};

use super::SeedError;
use crate::http::{require_field, HttpClient, HttpError};
use crate::output::progress;

/// Admin login endpoint
pub const LOGIN_PATH: &str = "/admin/login";

/// Admin credentials, sent as the login body
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

/// Logs in once and hands back the bearer token
pub struct Authenticator<'a> {
    client: &'a HttpClient,
}

impl<'a> Authenticator<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Log in; every failure here is fatal to the run
    pub async fn login(&self, credentials: &Credentials) -> Result<String, SeedError> {
        progress("🔐 Authenticating...");
        debug!("Logging in as {} at {}", credentials.email, self.client.base_url());

        match self.request_token(credentials).await {
            Ok(token) => {
                progress("✓ Authenticated");
                Ok(token)
            }
            Err(e) => {
                error!("Authentication failed: {}", e);
                Err(SeedError::Fatal(e))
            }
        }
    }

    async fn request_token(&self, credentials: &Credentials) -> Result<String, HttpError> {
        let json = self
            .client
            .post_json(LOGIN_PATH, credentials)
            .await?
            .into_json()?;

        require_field(&json, "/data/token")?
            .as_str()
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or(HttpError::MissingField("/data/token"))
    }
}
