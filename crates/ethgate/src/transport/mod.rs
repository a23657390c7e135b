//! Request transports.
//!
//! A [`Transport`] carries one JSON-RPC call to the gateway and returns the
//! `result` payload. [`HttpTransport`] is the production implementation;
//! the trait exists so the client can be driven by an in-memory double in
//! tests.

mod http;

pub use http::HttpTransport;

use crate::error::ClientError;
use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Abstraction over the mechanism that delivers a JSON-RPC call.
///
/// Implementations own whatever connection state they need and must be safe
/// to share across tasks. Retry policy lives behind this trait: a successful
/// return means the call went through, an error means the transport has given
/// up on it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one JSON-RPC call and returns the raw `result` value.
    ///
    /// `cancel` is consulted before each delivery attempt and aborts an
    /// in-flight attempt when triggered.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] describing the first non-recoverable failure.
    async fn call(
        &self,
        method: &str,
        params: Value,
        cancel: &CancellationToken,
    ) -> Result<Value, ClientError>;
}
