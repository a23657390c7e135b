//! # ethgate
//!
//! Client library for Ethereum-compatible nodes behind token-authenticated
//! JSON-RPC gateways (getblock.io-style).
//!
//! The crate provides:
//!
//! - **[`client`]**: The [`EthClient`] façade with typed accessors
//!   (`block_number`, `get_block_by_number`) and a generic `invoke` for any
//!   other JSON-RPC method.
//!
//! - **[`transport`]**: The [`Transport`] trait and the reqwest-backed
//!   [`HttpTransport`] with API-key injection, bounded retry on HTTP 5xx,
//!   and cooperative cancellation.
//!
//! - **[`codec`]**: Decoding of JSON-RPC payloads into typed [`Block`] and
//!   [`Transaction`] values, with `0x`-hex quantities as [`num::BigUint`]
//!   and timestamps as [`chrono::DateTime`].
//!
//! - **[`config`]**: [`ClientConfig`] with serde defaults and validation.
//!
//! - **[`units`]**: Wei denomination constants and conversions.
//!
//! ## Call Flow
//!
//! ```text
//! EthClient (typed accessors, invoke)
//!      │ method + params + CancellationToken
//!      ▼
//! Transport (HttpTransport)
//!      │ POST JSON-RPC envelope, auth header,
//!      │ retry ≤ max_attempts on HTTP 5xx only
//!      ▼
//! gateway ──► result payload ──► codec ──► Block / Transaction / BigUint
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use ethgate::{ClientConfig, EthClient};
//!
//! # async fn run() -> Result<(), ethgate::ClientError> {
//! let config = ClientConfig::new("https://eth.getblock.io/mainnet/", "api-key");
//! let client = EthClient::from_config(&config)?;
//!
//! let head = client.block_number().await?;
//! let block = client.get_block_by_number(&head, true).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod units;

pub use client::{EthClient, ETH_BLOCK_NUMBER_METHOD, ETH_GET_BLOCK_BY_NUMBER_METHOD};
pub use codec::{Block, BlockTransactions, DecodeError, Transaction};
pub use config::{ClientConfig, DEFAULT_AUTH_HEADER, DEFAULT_MAX_ATTEMPTS, MAINNET_ENDPOINT};
pub use error::ClientError;
pub use transport::{HttpTransport, Transport};
