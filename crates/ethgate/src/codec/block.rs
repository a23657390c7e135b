//! Block and transaction decoding.
//!
//! The raw intermediates in this module capture every hex-bearing field as an
//! optional string (absent, null, and `""` all mean zero for quantities and
//! empty for opaque fields), matching what hosted gateways actually send for
//! pre-London blocks and legacy transactions. The pure `from_raw` transforms
//! then produce the typed values.

use super::{decode_hex_int, DecodeError};
use chrono::{DateTime, TimeZone, Utc};
use num::{BigUint, ToPrimitive};
use serde::Deserialize;
use serde_json::Value;

/// A block as returned by `eth_getBlockByNumber`.
///
/// Quantity fields are decoded to [`BigUint`]; the timestamp is decoded from
/// hex Unix seconds to calendar time. Hashes, roots, the logs bloom, and
/// `extraData` stay opaque hex strings. The block `nonce` is an 8-byte hex
/// blob rather than a quantity and stays a string.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub base_fee_per_gas: BigUint,
    pub difficulty: BigUint,
    pub extra_data: String,
    pub gas_limit: BigUint,
    pub gas_used: BigUint,
    pub hash: String,
    pub logs_bloom: String,
    pub miner: String,
    pub mix_hash: String,
    pub nonce: String,
    pub number: BigUint,
    pub parent_hash: String,
    pub receipts_root: String,
    pub sha3_uncles: String,
    pub size: BigUint,
    pub state_root: String,
    pub timestamp: DateTime<Utc>,
    pub total_difficulty: BigUint,
    pub transactions: BlockTransactions,
    pub transactions_root: String,
    /// Uncle entries, passed through untyped.
    pub uncles: Vec<Value>,
}

/// Transaction entries of a block.
///
/// Nodes return bare hashes or full objects depending on the
/// `full_transactions` flag of the originating request.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockTransactions {
    Hashes(Vec<String>),
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Hashes(hashes) => hashes.len(),
            Self::Full(transactions) => transactions.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the decoded transaction objects when the block was fetched
    /// with full transactions.
    #[must_use]
    pub fn as_full(&self) -> Option<&[Transaction]> {
        match self {
            Self::Full(transactions) => Some(transactions),
            Self::Hashes(_) => None,
        }
    }
}

/// A transaction as embedded in a block or returned standalone.
///
/// `r` and `s` are signature components and stay opaque hex strings; `v` is
/// decoded as a quantity. `accessList` entries are passed through untyped.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub block_hash: String,
    pub block_number: BigUint,
    pub from: String,
    pub gas: BigUint,
    pub gas_price: BigUint,
    pub hash: String,
    pub input: String,
    pub nonce: BigUint,
    /// Recipient address; empty for contract creation.
    pub to: String,
    pub transaction_index: BigUint,
    pub value: BigUint,
    pub transaction_type: BigUint,
    pub v: BigUint,
    pub r: String,
    pub s: String,
    pub max_fee_per_gas: BigUint,
    pub max_priority_fee_per_gas: BigUint,
    pub access_list: Vec<Value>,
    pub chain_id: BigUint,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    base_fee_per_gas: Option<String>,
    difficulty: Option<String>,
    extra_data: Option<String>,
    gas_limit: Option<String>,
    gas_used: Option<String>,
    hash: Option<String>,
    logs_bloom: Option<String>,
    miner: Option<String>,
    mix_hash: Option<String>,
    nonce: Option<String>,
    number: Option<String>,
    parent_hash: Option<String>,
    receipts_root: Option<String>,
    sha3_uncles: Option<String>,
    size: Option<String>,
    state_root: Option<String>,
    timestamp: Option<String>,
    total_difficulty: Option<String>,
    transactions: Option<RawTransactions>,
    transactions_root: Option<String>,
    uncles: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTransactions {
    Hashes(Vec<String>),
    Full(Vec<RawTransaction>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    block_hash: Option<String>,
    block_number: Option<String>,
    from: Option<String>,
    gas: Option<String>,
    gas_price: Option<String>,
    hash: Option<String>,
    input: Option<String>,
    nonce: Option<String>,
    to: Option<String>,
    transaction_index: Option<String>,
    value: Option<String>,
    #[serde(rename = "type")]
    transaction_type: Option<String>,
    v: Option<String>,
    r: Option<String>,
    s: Option<String>,
    max_fee_per_gas: Option<String>,
    max_priority_fee_per_gas: Option<String>,
    access_list: Option<Vec<Value>>,
    chain_id: Option<String>,
}

impl Block {
    fn from_raw(raw: RawBlock) -> Result<Self, DecodeError> {
        let transactions = match raw.transactions {
            Some(RawTransactions::Full(list)) => {
                let mut decoded = Vec::with_capacity(list.len());
                for transaction in list {
                    decoded.push(Transaction::from_raw(transaction)?);
                }
                BlockTransactions::Full(decoded)
            }
            Some(RawTransactions::Hashes(hashes)) => BlockTransactions::Hashes(hashes),
            None => BlockTransactions::Hashes(Vec::new()),
        };

        Ok(Self {
            base_fee_per_gas: hex_field("baseFeePerGas", raw.base_fee_per_gas)?,
            difficulty: hex_field("difficulty", raw.difficulty)?,
            extra_data: raw.extra_data.unwrap_or_default(),
            gas_limit: hex_field("gasLimit", raw.gas_limit)?,
            gas_used: hex_field("gasUsed", raw.gas_used)?,
            hash: raw.hash.unwrap_or_default(),
            logs_bloom: raw.logs_bloom.unwrap_or_default(),
            miner: raw.miner.unwrap_or_default(),
            mix_hash: raw.mix_hash.unwrap_or_default(),
            nonce: raw.nonce.unwrap_or_default(),
            number: hex_field("number", raw.number)?,
            parent_hash: raw.parent_hash.unwrap_or_default(),
            receipts_root: raw.receipts_root.unwrap_or_default(),
            sha3_uncles: raw.sha3_uncles.unwrap_or_default(),
            size: hex_field("size", raw.size)?,
            state_root: raw.state_root.unwrap_or_default(),
            timestamp: timestamp_field("timestamp", raw.timestamp)?,
            total_difficulty: hex_field("totalDifficulty", raw.total_difficulty)?,
            transactions,
            transactions_root: raw.transactions_root.unwrap_or_default(),
            uncles: raw.uncles.unwrap_or_default(),
        })
    }
}

impl Transaction {
    fn from_raw(raw: RawTransaction) -> Result<Self, DecodeError> {
        Ok(Self {
            block_hash: raw.block_hash.unwrap_or_default(),
            block_number: hex_field("blockNumber", raw.block_number)?,
            from: raw.from.unwrap_or_default(),
            gas: hex_field("gas", raw.gas)?,
            gas_price: hex_field("gasPrice", raw.gas_price)?,
            hash: raw.hash.unwrap_or_default(),
            input: raw.input.unwrap_or_default(),
            nonce: hex_field("nonce", raw.nonce)?,
            to: raw.to.unwrap_or_default(),
            transaction_index: hex_field("transactionIndex", raw.transaction_index)?,
            value: hex_field("value", raw.value)?,
            transaction_type: hex_field("type", raw.transaction_type)?,
            v: hex_field("v", raw.v)?,
            r: raw.r.unwrap_or_default(),
            s: raw.s.unwrap_or_default(),
            max_fee_per_gas: hex_field("maxFeePerGas", raw.max_fee_per_gas)?,
            max_priority_fee_per_gas: hex_field(
                "maxPriorityFeePerGas",
                raw.max_priority_fee_per_gas,
            )?,
            access_list: raw.access_list.unwrap_or_default(),
            chain_id: hex_field("chainId", raw.chain_id)?,
        })
    }
}

fn hex_field(field: &'static str, value: Option<String>) -> Result<BigUint, DecodeError> {
    let text = value.unwrap_or_default();
    decode_hex_int(&text).map_err(|_| DecodeError::InvalidField { field, value: text })
}

fn timestamp_field(
    field: &'static str,
    value: Option<String>,
) -> Result<DateTime<Utc>, DecodeError> {
    let text = value.unwrap_or_default();
    let seconds = decode_hex_int(&text)
        .map_err(|_| DecodeError::InvalidField { field, value: text.clone() })?;
    let seconds = seconds
        .to_i64()
        .ok_or_else(|| DecodeError::TimestampRange { field, value: text.clone() })?;
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or(DecodeError::TimestampRange { field, value: text })
}

/// Decodes a block payload into a [`Block`].
///
/// # Errors
///
/// Returns [`DecodeError::Shape`] when the payload is not a block-shaped
/// object, or a field-level error for the first numeric field that fails to
/// decode.
pub fn decode_block(raw: Value) -> Result<Block, DecodeError> {
    let raw: RawBlock =
        serde_json::from_value(raw).map_err(|e| DecodeError::Shape(e.to_string()))?;
    Block::from_raw(raw)
}

/// Decodes a standalone transaction payload into a [`Transaction`].
///
/// # Errors
///
/// Same contract as [`decode_block`].
pub fn decode_transaction(raw: Value) -> Result<Transaction, DecodeError> {
    let raw: RawTransaction =
        serde_json::from_value(raw).map_err(|e| DecodeError::Shape(e.to_string()))?;
    Transaction::from_raw(raw)
}

/// Decodes the scalar `eth_blockNumber` payload.
///
/// # Errors
///
/// Returns [`DecodeError::Shape`] when the payload is not a JSON string, or
/// [`DecodeError::InvalidHexInt`] when the string is not a valid quantity.
pub fn decode_block_number(raw: &Value) -> Result<BigUint, DecodeError> {
    match raw.as_str() {
        Some(text) => decode_hex_int(text),
        None => Err(DecodeError::Shape(format!("expected a hex quantity string, got {raw}"))),
    }
}
