//! RPC Mock Builder for Ethereum JSON-RPC Testing
//!
//! Wraps mockito to provide Ethereum-specific response builders for the
//! methods the client exercises.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};

/// Builder for creating mock Ethereum RPC responses.
///
/// Uses mockito internally but provides Ethereum-specific helpers.
pub struct RpcMockBuilder {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl RpcMockBuilder {
    /// Creates a new RPC mock builder with a fresh mockito server.
    pub async fn new() -> Self {
        Self { server: Server::new_async().await, mocks: Vec::new() }
    }

    /// Returns the URL of the mock server.
    #[must_use]
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Mocks an `eth_blockNumber` request.
    pub fn mock_block_number(&mut self, block_number: u64) -> &mut Self {
        let mock = self
            .server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method"\s*:\s*"eth_blockNumber""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": format!("0x{:x}", block_number)
                })
                .to_string(),
            )
            .create();

        self.mocks.push(mock);
        self
    }

    /// Mocks an `eth_getBlockByNumber` request for a specific block number.
    pub fn mock_get_block_by_number(&mut self, block_number: u64, response: &Value) -> &mut Self {
        let mock = self
            .server
            .mock("POST", "/")
            .match_body(Matcher::Regex(format!(
                r#""method"\s*:\s*"eth_getBlockByNumber".*"params"\s*:\s*\["0x{block_number:x}""#
            )))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": response
                })
                .to_string(),
            )
            .create();

        self.mocks.push(mock);
        self
    }

    /// Mocks a generic JSON-RPC method with a custom result.
    pub fn mock_method(&mut self, method: &str, result: &Value) -> &mut Self {
        let mock = self
            .server
            .mock("POST", "/")
            .match_body(Matcher::Regex(format!(r#""method"\s*:\s*"{method}""#)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": result
                })
                .to_string(),
            )
            .create();

        self.mocks.push(mock);
        self
    }

    /// Mocks an RPC error response.
    pub fn mock_rpc_error(&mut self, method: &str, code: i32, message: &str) -> &mut Self {
        let mock = self
            .server
            .mock("POST", "/")
            .match_body(Matcher::Regex(format!(r#""method"\s*:\s*"{method}""#)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": {
                        "code": code,
                        "message": message
                    }
                })
                .to_string(),
            )
            .create();

        self.mocks.push(mock);
        self
    }

    /// Returns a reference to the underlying mockito server for advanced
    /// mocking (header matchers, body capture, hit expectations).
    pub fn get_server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Verifies all mocks were called.
    #[must_use]
    pub fn verify_all_called(&self) -> bool {
        self.mocks.iter().all(Mock::matched)
    }

    /// Gets the number of mocks that were called at least once.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.mocks.iter().filter(|m| m.matched()).count()
    }
}

/// Builder for constructing block responses.
pub struct BlockResponseBuilder {
    number: u64,
    hash: String,
    parent_hash: String,
    transactions: Vec<Value>,
    timestamp: u64,
}

impl BlockResponseBuilder {
    /// Creates a new block response builder.
    #[must_use]
    pub fn new(number: u64) -> Self {
        Self {
            number,
            hash: format!("0x{number:064x}"),
            parent_hash: format!("0x{:064x}", number.saturating_sub(1)),
            transactions: Vec::new(),
            timestamp: 1_600_000_000 + number,
        }
    }

    /// Sets a custom block hash.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Adds transactions to the block.
    #[must_use]
    pub fn with_transactions(mut self, txs: Vec<Value>) -> Self {
        self.transactions = txs;
        self
    }

    /// Sets a custom timestamp (Unix seconds).
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds the block response JSON.
    #[must_use]
    pub fn build(self) -> Value {
        json!({
            "number": format!("0x{:x}", self.number),
            "hash": self.hash,
            "parentHash": self.parent_hash,
            "timestamp": format!("0x{:x}", self.timestamp),
            "transactions": self.transactions,
            "gasLimit": "0x1c9c380",
            "gasUsed": "0x5208",
            "baseFeePerGas": "0x7",
            "difficulty": "0x0",
            "totalDifficulty": "0x0",
            "size": "0x220",
            "extraData": "0x",
            "logsBloom": "0x0",
            "miner": "0x0000000000000000000000000000000000000000",
            "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "nonce": "0x0000000000000000",
            "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "stateRoot": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "uncles": []
        })
    }
}

/// Builder for constructing transaction responses embedded in blocks.
pub struct TransactionResponseBuilder {
    block_number: u64,
    index: u64,
    value: String,
    to: Option<String>,
}

impl TransactionResponseBuilder {
    /// Creates a new transaction response builder.
    #[must_use]
    pub fn new(block_number: u64, index: u64) -> Self {
        Self {
            block_number,
            index,
            value: "0x0".to_string(),
            to: Some("0x0000000000000000000000000000000000000002".to_string()),
        }
    }

    /// Sets the transferred value as a hex quantity string.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Marks the transaction as contract creation (`to` is null).
    #[must_use]
    pub fn contract_creation(mut self) -> Self {
        self.to = None;
        self
    }

    /// Builds the transaction response JSON.
    #[must_use]
    pub fn build(self) -> Value {
        json!({
            "hash": format!("0x{:064x}", self.block_number * 1000 + self.index),
            "nonce": format!("0x{:x}", self.index),
            "blockHash": format!("0x{:064x}", self.block_number),
            "blockNumber": format!("0x{:x}", self.block_number),
            "transactionIndex": format!("0x{:x}", self.index),
            "from": "0x0000000000000000000000000000000000000001",
            "to": self.to,
            "value": self.value,
            "gas": "0x5208",
            "gasPrice": "0x4a817c800",
            "maxFeePerGas": "0x4a817c800",
            "maxPriorityFeePerGas": "0x3b9aca00",
            "input": "0x",
            "type": "0x2",
            "accessList": [],
            "chainId": "0x1",
            "v": "0x1",
            "r": format!("0x{:064x}", self.block_number + 1),
            "s": format!("0x{:064x}", self.block_number + 2)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rpc_mock_builder_creation() {
        let mock = RpcMockBuilder::new().await;
        assert!(!mock.url().is_empty());
    }

    #[test]
    fn test_block_response_builder() {
        let block = BlockResponseBuilder::new(100).build();
        assert_eq!(block["number"], "0x64");
        assert!(block["hash"].as_str().is_some());
        assert_eq!(block["transactions"], json!([]));
    }

    #[test]
    fn test_block_response_with_transactions() {
        let tx = TransactionResponseBuilder::new(100, 0).with_value("0xde0b6b3a7640000").build();
        let block = BlockResponseBuilder::new(100).with_transactions(vec![tx]).build();
        assert_eq!(block["transactions"][0]["value"], "0xde0b6b3a7640000");
        assert_eq!(block["transactions"][0]["blockNumber"], "0x64");
    }

    #[test]
    fn test_transaction_response_contract_creation() {
        let tx = TransactionResponseBuilder::new(5, 1).contract_creation().build();
        assert_eq!(tx["to"], Value::Null);
    }
}
