//! Deferred requests.
//!
//! A [`Request`] captures everything needed to call one Guardian endpoint
//! without touching the network. Nothing is sent until [`Request::start`] is
//! awaited.

use std::fmt;
use std::marker::PhantomData;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{GuardianError, Result};

/// An unexecuted call to the Guardian API that resolves to a `T`.
pub struct Request<T> {
    client: reqwest::Client,
    method: Method,
    url: Url,
    token: String,
    body: Option<Map<String, Value>>,
    _response: PhantomData<fn() -> T>,
}

impl<T> Request<T> {
    pub(crate) fn new(
        client: reqwest::Client,
        method: Method,
        url: Url,
        token: impl Into<String>,
        body: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            client,
            method,
            url,
            token: token.into(),
            body,
            _response: PhantomData,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Token sent as `Authorization: Bearer <token>`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// JSON object sent as the request body, `None` for bodiless requests.
    pub fn body(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(GuardianError::transport)?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }
}

impl<T: DeserializeOwned> Request<T> {
    /// Execute the request.
    ///
    /// Resolves to the decoded success body, or to a [`GuardianError`]
    /// describing either a transport failure or the server's error response.
    pub async fn start(self) -> Result<T> {
        debug!("Guardian request: {} {}", self.method, self.url);

        let mut builder = self
            .client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers()?);
        if let Some(body) = &self.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Guardian response ({}): {}", status, body);

        if !status.is_success() {
            let error = GuardianError::server(parse_error_body(&body), status.as_u16());
            warn!("Guardian request {} {} failed: {}", self.method, self.url, error);
            return Err(error);
        }

        decode_success_body(&body)
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Error bodies are only kept when they are JSON objects.
fn parse_error_body(body: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(info)) => Some(info),
        _ => None,
    }
}

/// An empty body decodes as `null`, so `()` succeeds on `204 No Content`.
fn decode_success_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_str(body)?)
}
