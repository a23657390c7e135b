use crate::{
    config::ClientConfig,
    error::ClientError,
    transport::Transport,
    types::{JsonRpcRequest, JsonRpcResponse},
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, ClientBuilder,
};
use serde_json::Value;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tokio_util::sync::CancellationToken;

/// Longest error body excerpt carried inside an error value.
const MAX_ERROR_BODY: usize = 256;

/// HTTP POST transport for a JSON-RPC gateway.
///
/// Construction bakes the endpoint, authentication header, and timeouts into
/// an immutable value; a built transport never changes behavior and can be
/// shared freely across tasks.
///
/// A call makes up to `max_attempts` delivery attempts. Only completed
/// exchanges with an HTTP 5xx status are retried; network failures, 4xx
/// statuses, and RPC-level errors end the call on the spot. Retries are
/// back-to-back, leaving pacing to the caller.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    max_attempts: u32,
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Builds a transport from the given configuration.
    ///
    /// When `auth_token` is empty no authentication header is installed;
    /// otherwise the token is attached to every request under the configured
    /// header name and marked sensitive so it stays out of debug output.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an invalid configuration, a header
    /// name or token that cannot appear in an HTTP header, or a failure to
    /// build the underlying HTTP client.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if !config.auth_token.is_empty() {
            let name = HeaderName::from_bytes(config.auth_header.as_bytes()).map_err(|e| {
                ClientError::Config(format!(
                    "invalid auth header name {:?}: {e}",
                    config.auth_header
                ))
            })?;
            let mut value = HeaderValue::from_str(&config.auth_token).map_err(|_| {
                ClientError::Config(
                    "auth token contains bytes not allowed in a header value".to_string(),
                )
            })?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let client = ClientBuilder::new()
            .default_headers(headers)
            .pool_idle_timeout(Duration::from_secs(30))
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("ethgate/", env!("CARGO_PKG_VERSION")))
            .tcp_keepalive(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "failed to build http client");
                ClientError::Config(format!("HTTP client build failed: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            max_attempts: config.max_attempts,
            next_id: AtomicU64::new(1),
        })
    }

    /// One wire exchange: POST the envelope, check the status, decode the
    /// response envelope.
    async fn send_once(&self, request: &JsonRpcRequest) -> Result<Value, ClientError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let raw_text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status.as_u16(), truncate_body(raw_text)));
        }

        let body = response.bytes().await?;
        let envelope: JsonRpcResponse = serde_json::from_slice(&body)?;
        envelope
            .into_result()
            .map_err(|e| ClientError::Rpc { code: e.code, message: e.message })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: &str,
        params: Value,
        cancel: &CancellationToken,
    ) -> Result<Value, ClientError> {
        let request =
            JsonRpcRequest::new(method, params, self.next_id.fetch_add(1, Ordering::Relaxed));
        tracing::debug!(method, id = request.id, "sending rpc request");

        let mut attempt: u32 = 1;
        loop {
            if cancel.is_cancelled() {
                return Err(ClientError::Cancelled);
            }

            let outcome = tokio::select! {
                () = cancel.cancelled() => return Err(ClientError::Cancelled),
                outcome = self.send_once(&request) => outcome,
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.max_attempts => {
                    tracing::warn!(
                        method,
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "retrying after server error"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Caps an error body at [`MAX_ERROR_BODY`] bytes without splitting a
/// multi-byte character.
fn truncate_body(raw: String) -> String {
    if raw.len() <= MAX_ERROR_BODY {
        return raw;
    }
    let mut cut = MAX_ERROR_BODY;
    while !raw.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... (truncated)", &raw[..cut])
}
