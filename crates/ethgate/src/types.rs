//! JSON-RPC 2.0 wire envelope.
//!
//! Request and response framing only; decoding of `result` payloads into
//! domain objects lives in [`crate::codec`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// JSON-RPC protocol version string.
pub const JSONRPC_VERSION: &str = "2.0";

/// A single JSON-RPC request.
///
/// Constructed once per call and serialized as the POST body. Parameters are
/// always an ordered JSON array; ids are assigned by the transport from a
/// per-client counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always `"2.0"`.
    pub jsonrpc: Cow<'static, str>,
    /// RPC method name (e.g. `eth_blockNumber`).
    pub method: String,
    /// Ordered, heterogeneous parameter list.
    pub params: Value,
    /// Request identifier echoed back by the server.
    pub id: u64,
}

impl JsonRpcRequest {
    /// Creates a new request with the protocol version filled in.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Value, id: u64) -> Self {
        Self { jsonrpc: Cow::Borrowed(JSONRPC_VERSION), method: method.into(), params, id }
    }
}

/// A single JSON-RPC response envelope.
///
/// Exactly one of `result` and `error` is expected; `jsonrpc` and `id` are
/// kept lenient because hosted gateways are not uniformly strict about
/// echoing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version as echoed by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    /// Success payload. Absent on error; may be JSON null on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Structured RPC-level error, if the call failed inside the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    /// Echoed request id; servers variously return numbers or strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl JsonRpcResponse {
    /// Splits the envelope into its payload or its error object.
    ///
    /// An envelope with neither member yields JSON null: some gateways omit
    /// `result` entirely for null-valued answers.
    ///
    /// # Errors
    ///
    /// Returns the embedded [`JsonRpcError`] when the `error` member is set.
    pub fn into_result(self) -> Result<Value, JsonRpcError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// JSON-RPC error object carried inside a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Numeric error code (e.g. -32601 for method not found).
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured error detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
