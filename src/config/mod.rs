//! Configuration module
//!
//! Handles loading and layering configuration: defaults, config file,
//! environment variables, then command-line flags.

mod env;
mod file;

pub use env::EnvConfig;
pub use file::{ConfigFile, DEFAULT_CONFIG_PATH};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::seeder::Credentials;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CMS base URL
    pub base_url: String,

    /// Admin email
    pub email: String,

    /// Admin password
    pub password: String,

    /// HTTP timeout in seconds; requests never time out when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Exit non-zero when any record fails
    pub strict: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_string(),
            email: "admin@strapi.local".to_string(),
            password: "Admin123!".to_string(),
            timeout_secs: None,
            strict: false,
        }
    }
}

impl AppConfig {
    /// Apply environment overrides on top of this configuration
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(url) = &env.url {
            self.base_url = url.clone();
        }
        if let Some(email) = &env.email {
            self.email = email.clone();
        }
        if let Some(password) = &env.password {
            self.password = password.clone();
        }
        if let Some(timeout) = env.timeout {
            self.timeout_secs = Some(timeout);
        }
        if let Some(strict) = env.strict {
            self.strict = strict;
        }
        self
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.email, &self.password)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!(
                "Invalid base URL '{}': must start with http:// or https://",
                self.base_url
            );
        }
        if self.email.trim().is_empty() {
            anyhow::bail!("Admin email must not be empty");
        }
        if self.timeout_secs == Some(0) {
            anyhow::bail!("Timeout must be greater than 0 seconds");
        }
        Ok(())
    }
}
