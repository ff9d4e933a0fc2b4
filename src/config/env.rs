//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "CMS_SEED";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Base URL from CMS_SEED_URL
    pub url: Option<String>,
    /// Admin email from CMS_SEED_EMAIL
    pub email: Option<String>,
    /// Admin password from CMS_SEED_PASSWORD
    pub password: Option<String>,
    /// Timeout from CMS_SEED_TIMEOUT
    pub timeout: Option<u64>,
    /// Config file from CMS_SEED_CONFIG
    pub config_file: Option<String>,
    /// Verbose from CMS_SEED_VERBOSE
    pub verbose: Option<bool>,
    /// Strict from CMS_SEED_STRICT
    pub strict: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            url: get_env("URL"),
            email: get_env("EMAIL"),
            password: get_env("PASSWORD"),
            timeout: get_env_parse("TIMEOUT"),
            config_file: get_env("CONFIG"),
            verbose: get_env_bool("VERBOSE"),
            strict: get_env_bool("STRICT"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.url.is_some()
            || self.email.is_some()
            || self.password.is_some()
            || self.timeout.is_some()
            || self.config_file.is_some()
            || self.verbose.is_some()
            || self.strict.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        let password = self.password.as_ref().map(|_| "********");
        println!("Environment Configuration:");
        println!("  {}_URL:       {:?}", ENV_PREFIX, self.url);
        println!("  {}_EMAIL:     {:?}", ENV_PREFIX, self.email);
        println!("  {}_PASSWORD:  {:?}", ENV_PREFIX, password);
        println!("  {}_TIMEOUT:   {:?}", ENV_PREFIX, self.timeout);
        println!("  {}_CONFIG:    {:?}", ENV_PREFIX, self.config_file);
        println!("  {}_VERBOSE:   {:?}", ENV_PREFIX, self.verbose);
        println!("  {}_STRICT:    {:?}", ENV_PREFIX, self.strict);
        if !self.has_any() {
            println!("\n  (no {ENV_PREFIX}_* variables set)");
        }
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}"))
        .ok()
        .filter(|v| !v.is_empty())
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables in tests
#[cfg(test)]
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

#[cfg(test)]
impl EnvBuilder {
    /// Create a new environment builder
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set base URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_URL"), url.into()));
        self
    }

    /// Set admin email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_EMAIL"), email.into()));
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_TIMEOUT"), timeout.to_string()));
        self
    }

    /// Set strict mode
    pub fn strict(mut self, strict: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_STRICT"), strict.to_string()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

#[cfg(test)]
impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
#[cfg(test)]
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

#[cfg(test)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}
