//! Client configuration.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while setting up a Guardian client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The domain could not be turned into a base URL
    #[error("Invalid Guardian domain: {0}")]
    InvalidDomain(String),

    /// The HTTP client could not be initialized
    #[error("Failed to initialize HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Settings shared by every request built from one [`GuardianApi`](crate::GuardianApi).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Value sent in the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("guardian-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the HTTP client used to execute requests.
    pub fn build_http_client(&self) -> Result<reqwest::Client, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;
        Ok(client)
    }
}

/// Turn a tenant domain into the API base URL.
///
/// A bare host gets an `https://` scheme; a value that already has a scheme is
/// kept. The returned URL always ends with `/` so relative paths join below it.
pub(crate) fn base_url_for_domain(domain: &str) -> Result<Url, ConfigError> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(ConfigError::InvalidDomain("domain is empty".to_string()));
    }

    let mut raw = if domain.contains("://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };
    if !raw.ends_with('/') {
        raw.push('/');
    }

    let url = Url::parse(&raw)
        .map_err(|e| ConfigError::InvalidDomain(format!("{}: {}", domain, e)))?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ConfigError::InvalidDomain(domain.to_string()));
    }
    Ok(url)
}
