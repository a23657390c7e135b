//! Decoding of JSON-RPC result payloads into typed domain objects.
//!
//! All numeric block and transaction fields travel as `0x`-prefixed hex
//! strings. Decoding is two-stage: payloads deserialize into raw
//! intermediates whose hex-bearing fields are captured as plain strings,
//! then a pure transform converts them to [`num::BigUint`] values and
//! calendar time. The transform either fully succeeds or fails on the first
//! offending field.

mod block;
mod hex;

pub use block::{
    decode_block, decode_block_number, decode_transaction, Block, BlockTransactions, Transaction,
};
pub use hex::{decode_hex_int, encode_hex_int};

use thiserror::Error;

/// Decoding failure, distinct from transport-level errors.
///
/// Carries the offending input so a single malformed response can be
/// diagnosed from the error alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Non-empty text that is not a valid integer literal.
    #[error("invalid integer literal {0:?}")]
    InvalidHexInt(String),

    /// A known-numeric field held text that is not a valid integer literal.
    #[error("field `{field}`: invalid integer literal {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// A timestamp field decoded to a second count outside the representable
    /// calendar range.
    #[error("field `{field}`: timestamp {value:?} is outside the representable range")]
    TimestampRange { field: &'static str, value: String },

    /// The payload does not match the expected object/array/string structure.
    #[error("payload shape mismatch: {0}")]
    Shape(String),
}
