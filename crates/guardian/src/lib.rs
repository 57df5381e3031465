//! Guardian - client for the Guardian multi-factor authentication API.
//!
//! This crate builds device management requests for a Guardian enrollment and
//! normalizes every failure into a [`GuardianError`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use guardian::{DeviceApi, GuardianApi};
//!
//! let device = GuardianApi::for_domain("tenant.guardian.auth0.com")?
//!     .device(&enrollment.id, &enrollment.device_token);
//!
//! match device.update(None, Some("Work phone"), None).start().await {
//!     Ok(data) => println!("updated: {:?}", data),
//!     Err(e) if e.error_code() == "device_account_not_found" => { /* re-enroll */ }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod client;
mod config;
mod device;
mod error;
mod request;
mod types;

pub use client::GuardianApi;
pub use config::{ClientConfig, ConfigError, DEFAULT_TIMEOUT_SECS};
pub use device::{DeviceApi, DeviceApiClient};
pub use error::{
    GuardianError, Result, ERROR_CODE_KEY, UNKNOWN_APP_ERROR, UNKNOWN_SERVER_ERROR,
};
pub use request::Request;
pub use types::{new_device_identifier, DeviceData};
