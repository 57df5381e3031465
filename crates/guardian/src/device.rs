//! Enrollment device management.
//!
//! Builds the requests that create, update or delete the device bound to an
//! enrollment. Building a request never fails and performs no I/O.

use log::debug;
use reqwest::{Method, Url};

use crate::request::Request;
use crate::types::{device_body, DeviceData};

/// Path of the device resource, relative to the tenant base URL.
const DEVICE_ACCOUNTS_PATH: &str = "api/device-accounts";

/// Device management requests for one enrollment.
pub trait DeviceApi {
    /// Request to delete the device, invalidating its enrollment.
    ///
    /// The server disables the second factor if this was the user's only
    /// enrollment.
    fn delete(&self) -> Request<()>;

    /// Request to create or re-sync the device data of the enrollment.
    ///
    /// * `identifier` - a unique identifier for this device, usually a UUID
    /// * `name` - the name to use for this device
    /// * `notification_token` - the token used to send push notifications
    fn create(
        &self,
        identifier: &str,
        name: &str,
        notification_token: &str,
    ) -> Request<DeviceData>;

    /// Request to update the device data.
    ///
    /// Parameters left as `None` are not sent and remain unchanged.
    fn update(
        &self,
        identifier: Option<&str>,
        name: Option<&str>,
        notification_token: Option<&str>,
    ) -> Request<DeviceData>;
}

/// [`DeviceApi`] bound to a single enrollment.
#[derive(Debug, Clone)]
pub struct DeviceApiClient {
    client: reqwest::Client,
    url: Url,
    token: String,
}

impl DeviceApiClient {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: Url,
        enrollment_id: &str,
        token: &str,
    ) -> Self {
        let url = device_url(&base_url, enrollment_id);
        Self {
            client,
            url,
            token: token.to_string(),
        }
    }

    /// URL of the enrollment's device resource.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn request<T>(&self, method: Method, body: Option<DeviceData>) -> Request<T> {
        debug!("Building device request: {} {}", method, self.url);
        Request::new(
            self.client.clone(),
            method,
            self.url.clone(),
            self.token.as_str(),
            body,
        )
    }
}

impl DeviceApi for DeviceApiClient {
    fn delete(&self) -> Request<()> {
        self.request(Method::DELETE, None)
    }

    fn create(
        &self,
        identifier: &str,
        name: &str,
        notification_token: &str,
    ) -> Request<DeviceData> {
        let body = device_body(Some(identifier), Some(name), Some(notification_token));
        self.request(Method::POST, Some(body))
    }

    fn update(
        &self,
        identifier: Option<&str>,
        name: Option<&str>,
        notification_token: Option<&str>,
    ) -> Request<DeviceData> {
        let body = device_body(identifier, name, notification_token);
        self.request(Method::PATCH, Some(body))
    }
}

fn device_url(base_url: &Url, enrollment_id: &str) -> Url {
    let mut url = base_url.clone();
    let path = format!(
        "{}{}/{}",
        url.path(),
        DEVICE_ACCOUNTS_PATH,
        urlencoding::encode(enrollment_id)
    );
    url.set_path(&path);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuardianApi;
    use serde_json::{json, Value};

    fn device_api() -> DeviceApiClient {
        GuardianApi::for_domain("tenant.guardian.auth0.com")
            .unwrap()
            .device("dev_3xUg0y4GyPdUbKWF", "device-token")
    }

    #[test]
    fn test_delete_targets_device_without_body() {
        let request = device_api().delete();
        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            "https://tenant.guardian.auth0.com/api/device-accounts/dev_3xUg0y4GyPdUbKWF"
        );
        assert_eq!(request.token(), "device-token");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_create_sends_all_fields() {
        let request = device_api().create("device-uuid", "iPhone", "apns-token");
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url(), device_api().url());
        assert_eq!(
            Value::Object(request.body().cloned().unwrap()),
            json!({
                "identifier": "device-uuid",
                "name": "iPhone",
                "notification_token": "apns-token"
            })
        );
    }

    #[test]
    fn test_update_sends_only_set_fields() {
        let request = device_api().update(None, Some("phone"), None);
        assert_eq!(request.method(), &Method::PATCH);
        assert_eq!(
            Value::Object(request.body().cloned().unwrap()),
            json!({ "name": "phone" })
        );
    }

    #[test]
    fn test_update_with_nothing_set_sends_empty_object() {
        let request = device_api().update(None, None, None);
        assert_eq!(request.body().map(|b| b.len()), Some(0));
    }

    #[test]
    fn test_enrollment_id_is_encoded() {
        let api = GuardianApi::for_domain("tenant.guardian.auth0.com").unwrap();
        let device = api.device("a/b c", "token");
        assert_eq!(
            device.url().as_str(),
            "https://tenant.guardian.auth0.com/api/device-accounts/a%2Fb%20c"
        );
    }

    #[test]
    fn test_base_path_is_preserved() {
        let api = GuardianApi::for_domain("https://example.com/guardian").unwrap();
        let device = api.device("enrollment", "token");
        assert_eq!(
            device.url().as_str(),
            "https://example.com/guardian/api/device-accounts/enrollment"
        );
    }
}
