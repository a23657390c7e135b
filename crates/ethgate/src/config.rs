//! Client configuration.
//!
//! [`ClientConfig`] is plain data: it can be deserialized from a config file
//! section, built up with the `with_*` setters, or filled in field by field.
//! The transport copies what it needs at construction time and never consults
//! the config again, so mutating a config after building a client has no
//! effect on that client.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default gateway endpoint for Ethereum mainnet.
pub const MAINNET_ENDPOINT: &str = "https://eth.getblock.io/mainnet/";

/// Header used to present the API key unless overridden.
pub const DEFAULT_AUTH_HEADER: &str = "x-api-key";

/// Total request attempts (first try plus retries) for retryable failures.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Settings for a single gateway connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Gateway URL. Must start with `http` or `https`. Defaults to
    /// [`MAINNET_ENDPOINT`].
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key sent with every request. When empty, no authentication header
    /// is attached at all. Defaults to `""`.
    #[serde(default)]
    pub auth_token: String,

    /// Name of the header carrying the API key. Defaults to
    /// [`DEFAULT_AUTH_HEADER`].
    #[serde(default = "default_auth_header")]
    pub auth_header: String,

    /// Upper bound on attempts per call, counting the first try. Must be
    /// greater than 0. Defaults to [`DEFAULT_MAX_ATTEMPTS`].
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Whole-request timeout in seconds. Defaults to `30`.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// TCP connect timeout in seconds. Defaults to `5`.
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
}

fn default_endpoint() -> String {
    MAINNET_ENDPOINT.to_string()
}

fn default_auth_header() -> String {
    DEFAULT_AUTH_HEADER.to_string()
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            auth_token: String::new(),
            auth_header: default_auth_header(),
            max_attempts: default_max_attempts(),
            request_timeout_seconds: default_request_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

impl ClientConfig {
    /// Creates a config for the given endpoint and API key with default
    /// settings for everything else.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), auth_token: auth_token.into(), ..Self::default() }
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = auth_token.into();
        self
    }

    /// Sets the name of the authentication header.
    #[must_use]
    pub fn with_auth_header(mut self, auth_header: impl Into<String>) -> Self {
        self.auth_header = auth_header.into();
        self
    }

    /// Sets the attempt budget, counting the first try.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Whole-request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Connect timeout as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Checks the config for values that cannot produce a working client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an empty or non-HTTP endpoint, an
    /// empty attempt budget, or a zero request timeout.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.endpoint.is_empty() {
            return Err(ClientError::Config("endpoint must not be empty".to_string()));
        }
        if !self.endpoint.starts_with("http") {
            return Err(ClientError::Config(format!(
                "endpoint must be an HTTP(S) URL, got {:?}",
                self.endpoint
            )));
        }
        if self.max_attempts == 0 {
            return Err(ClientError::Config("max_attempts must be greater than 0".to_string()));
        }
        if self.request_timeout_seconds == 0 {
            return Err(ClientError::Config(
                "request_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
