use crate::codec::DecodeError;
use thiserror::Error;

/// Errors surfaced by the client and its transport.
///
/// The taxonomy separates failures by where they occur and what retrying
/// could achieve:
/// - Network failures mean the HTTP exchange never completed.
/// - Server errors (HTTP 5xx) are the gateway's fault and are the only
///   retryable category.
/// - Client errors (HTTP 4xx) and RPC errors are caller mistakes and are
///   returned immediately.
/// - Decode errors mean the node answered but the payload did not match the
///   expected shape.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    /// Network-level error from the underlying HTTP client: DNS, connect,
    /// TLS, timeout, or a connection dropped mid-exchange.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP 5xx response from the gateway.
    ///
    /// The body is truncated to keep log lines bounded.
    #[error("Server error: HTTP {status}: {body}")]
    HttpServer { status: u16, body: String },

    /// HTTP 4xx response: bad credentials, unknown route, payload rejected.
    #[error("Client error: HTTP {status}: {body}")]
    HttpClient { status: u16, body: String },

    /// JSON-RPC error object returned by the node.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    /// Result payload did not decode into the expected domain value.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Response body was not valid JSON or not a JSON-RPC envelope.
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller's cancellation token was triggered before or during the
    /// call.
    #[error("Call cancelled")]
    Cancelled,

    /// Client construction failed: bad endpoint, bad header material.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns `true` if the transport may retry the request.
    ///
    /// Only HTTP 5xx responses qualify. A completed exchange with a server
    /// error status is strong evidence of a transient gateway problem;
    /// everything else, including network failures, is treated as
    /// non-retryable so the caller sees the failure immediately instead of
    /// paying for attempts that cannot change the outcome.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::HttpServer { .. })
    }

    /// Returns the HTTP status code for HTTP-level errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpServer { status, .. } | Self::HttpClient { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds the appropriate HTTP error variant for a non-2xx status.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        if status >= 500 {
            Self::HttpServer { status, body }
        } else {
            Self::HttpClient { status, body }
        }
    }
}
