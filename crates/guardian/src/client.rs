//! Entry point for the Guardian API.

use log::debug;
use reqwest::Url;

use crate::config::{base_url_for_domain, ClientConfig, ConfigError};
use crate::device::DeviceApiClient;

/// Client for one Guardian tenant.
///
/// Holds the shared HTTP client and the tenant's base URL. Device scoped
/// request builders are obtained with [`device`](Self::device).
///
/// # Example
///
/// ```rust,ignore
/// use guardian::{DeviceApi, GuardianApi};
///
/// let api = GuardianApi::for_domain("tenant.guardian.auth0.com")?;
/// api.device(&enrollment.id, &enrollment.device_token)
///     .delete()
///     .start()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct GuardianApi {
    client: reqwest::Client,
    base_url: Url,
}

impl GuardianApi {
    /// Create a client for `domain` using the default configuration.
    ///
    /// # Arguments
    ///
    /// * `domain` - The tenant domain (e.g., "tenant.guardian.auth0.com") or a
    ///   full URL such as "http://127.0.0.1:8080"
    pub fn for_domain(domain: &str) -> Result<Self, ConfigError> {
        Self::with_config(domain, &ClientConfig::default())
    }

    /// Create a client for `domain` with explicit settings.
    pub fn with_config(domain: &str, config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = base_url_for_domain(domain)?;
        let client = config.build_http_client()?;
        debug!("Guardian API client for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Device request builder for one enrollment.
    ///
    /// * `enrollment_id` - id of the enrollment owning the device
    /// * `token` - the enrollment's device token, used as bearer token
    pub fn device(&self, enrollment_id: &str, token: &str) -> DeviceApiClient {
        DeviceApiClient::new(
            self.client.clone(),
            self.base_url.clone(),
            enrollment_id,
            token,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_domain_normalizes_base_url() {
        let api = GuardianApi::for_domain("tenant.guardian.auth0.com").unwrap();
        assert_eq!(api.base_url().as_str(), "https://tenant.guardian.auth0.com/");
    }

    #[test]
    fn test_for_domain_rejects_empty_domain() {
        assert!(matches!(
            GuardianApi::for_domain(""),
            Err(ConfigError::InvalidDomain(_))
        ));
    }
}
