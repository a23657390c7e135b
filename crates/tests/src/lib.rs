//! Integration Tests for the ethgate Gateway Client
//!
//! This crate contains the test modules:
//!
//! - `transport_tests`: HTTP transport behavior against real local servers —
//!   authentication header injection, retry-on-5xx attempt accounting,
//!   cancellation, and error classification
//! - `client_tests`: End-to-end `EthClient` flows over HTTP, from request
//!   envelope to decoded `Block`/`BigUint` values
//! - `mock_infrastructure`: Reusable mock types for testing (mockito builder,
//!   scripted stub server, response fixtures)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --package ethgate-tests
//! ```
//!
//! All tests run against servers bound to ephemeral localhost ports; no
//! external endpoint or API key is required. Set `RUST_LOG=ethgate=debug` to
//! watch the transport's retry decisions while a test runs.
