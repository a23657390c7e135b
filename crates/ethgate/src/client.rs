//! Chain-client façade.

use crate::{
    codec::{self, Block},
    config::ClientConfig,
    error::ClientError,
    transport::{HttpTransport, Transport},
};
use num::BigUint;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

/// Method name for fetching the head block number.
pub const ETH_BLOCK_NUMBER_METHOD: &str = "eth_blockNumber";
/// Method name for fetching a block by number.
pub const ETH_GET_BLOCK_BY_NUMBER_METHOD: &str = "eth_getBlockByNumber";

/// A client for an Ethereum-compatible node behind a JSON-RPC gateway.
///
/// The client composes a [`Transport`] and layers response decoding on top.
/// Typed accessors cover the common calls; [`invoke`](Self::invoke) reaches
/// any other method by name. A held [`CancellationToken`] is passed to every
/// call, so one token can abort all in-flight work of a client.
pub struct EthClient<T> {
    transport: T,
    cancel: CancellationToken,
}

impl EthClient<HttpTransport> {
    /// Builds a client with an [`HttpTransport`] from the given config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the transport cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> EthClient<T> {
    /// Creates a client over the given transport with a token that never
    /// fires.
    pub fn new(transport: T) -> Self {
        Self { transport, cancel: CancellationToken::new() }
    }

    /// Replaces the cancellation token passed to every call.
    #[must_use]
    pub fn with_cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Calls an arbitrary JSON-RPC method and deserializes its result.
    ///
    /// This is the escape hatch for methods without a typed accessor:
    ///
    /// ```ignore
    /// let gas_price: String = client.invoke("eth_gasPrice", json!([])).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Transport errors pass through; a result payload that does not fit `R`
    /// surfaces as [`ClientError::Json`].
    pub async fn invoke<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<R, ClientError> {
        let raw = self.transport.call(method, params, &self.cancel).await?;
        Ok(serde_json::from_value(raw)?)
    }

    /// Returns the current head block number.
    ///
    /// # Errors
    ///
    /// Transport errors pass through; a non-string or malformed payload
    /// surfaces as [`ClientError::Decode`].
    pub async fn block_number(&self) -> Result<BigUint, ClientError> {
        let raw = self.transport.call(ETH_BLOCK_NUMBER_METHOD, json!([]), &self.cancel).await?;
        Ok(codec::decode_block_number(&raw)?)
    }

    /// Fetches a block by number.
    ///
    /// With `full_transactions` the node embeds complete transaction objects;
    /// otherwise the block carries transaction hashes only. An unknown block
    /// number yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Transport errors pass through; a malformed block payload surfaces as
    /// [`ClientError::Decode`].
    pub async fn get_block_by_number(
        &self,
        number: &BigUint,
        full_transactions: bool,
    ) -> Result<Option<Block>, ClientError> {
        let params = json!([codec::encode_hex_int(number), full_transactions]);
        let raw = self
            .transport
            .call(ETH_GET_BLOCK_BY_NUMBER_METHOD, params, &self.cancel)
            .await?;
        if raw.is_null() {
            return Ok(None);
        }
        Ok(Some(codec::decode_block(raw)?))
    }
}
