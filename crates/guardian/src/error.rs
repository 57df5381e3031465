//! Error types for the Guardian client.
//!
//! Every failed request resolves to a [`GuardianError`], which is either a
//! transport failure detected before a server response could be interpreted,
//! or an error body returned by the Guardian service.

use serde_json::{Map, Value};
use thiserror::Error;

/// Code reported for failures that never reached the server.
pub const UNKNOWN_APP_ERROR: &str = "unknown_app_error";

/// Code reported for server failures without a usable `errorCode` field.
pub const UNKNOWN_SERVER_ERROR: &str = "unknown_server_error";

/// Key carrying the machine readable code in Guardian error bodies.
pub const ERROR_CODE_KEY: &str = "errorCode";

/// Result type alias for Guardian requests.
pub type Result<T> = std::result::Result<T, GuardianError>;

/// A failed Guardian request.
///
/// Use [`error_code`](Self::error_code) for programmatic branching and the
/// `Display` implementation for logging.
#[derive(Debug, Error)]
pub enum GuardianError {
    /// Connectivity, timeout or serialization failure on the client side.
    #[error("GuardianError(errorCode=unknown_app_error)")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Error response returned by the server.
    #[error("{}", render_server(.info.as_ref()))]
    Server {
        /// Parsed error body, absent when the body was not a JSON object
        info: Option<Map<String, Value>>,
        /// HTTP status code of the response
        status_code: u16,
    },
}

impl GuardianError {
    /// Wrap a transport level failure.
    pub fn transport(
        error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::Transport(error.into())
    }

    /// Create a server error from a parsed error body and status code.
    pub fn server(info: Option<Map<String, Value>>, status_code: u16) -> Self {
        Self::Server { info, status_code }
    }

    /// Canonical error code.
    ///
    /// A transport failure always reports `unknown_app_error`. A server failure
    /// reports the string value of `errorCode` from its body, or
    /// `unknown_server_error` when there is none.
    pub fn error_code(&self) -> &str {
        match self {
            Self::Transport(_) => UNKNOWN_APP_ERROR,
            Self::Server { info, .. } => info
                .as_ref()
                .and_then(|info| info.get(ERROR_CODE_KEY))
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_SERVER_ERROR),
        }
    }

    /// HTTP status code of a server failure, `0` for transport failures.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Transport(_) => 0,
            Self::Server { status_code, .. } => *status_code,
        }
    }

    /// Error body returned by the server, if any.
    pub fn info(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Transport(_) => None,
            Self::Server { info, .. } => info.as_ref(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for GuardianError {
    fn from(error: reqwest::Error) -> Self {
        Self::transport(error)
    }
}

impl From<serde_json::Error> for GuardianError {
    fn from(error: serde_json::Error) -> Self {
        Self::transport(error)
    }
}

fn render_server(info: Option<&Map<String, Value>>) -> String {
    match info {
        Some(info) => format!("GuardianError(info={})", render_info(info)),
        None => format!("GuardianError(errorCode={UNKNOWN_SERVER_ERROR})"),
    }
}

/// Renders `{key: value, ...}`; strings are written without quotes.
fn render_info(info: &Map<String, Value>) -> String {
    let entries: Vec<String> = info
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}: {}", key, s),
            other => format!("{}: {}", key, other),
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}
