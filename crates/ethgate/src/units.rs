//! Wei denominations and conversions.
//!
//! Amounts on the wire are Wei. The constants here are the named powers of
//! ten up to 1 Ether (10^18 Wei).

use num::{BigUint, ToPrimitive};

/// 1 Wei.
pub const WEI: u64 = 1;
/// 10^3 Wei, also known as babbage.
pub const KWEI: u64 = 1_000;
/// 10^6 Wei, also known as lovelace.
pub const MWEI: u64 = 1_000_000;
/// 10^9 Wei, also known as shannon.
pub const GWEI: u64 = 1_000_000_000;
/// 10^12 Wei, also known as szabo.
pub const TWEI: u64 = 1_000_000_000_000;
/// 10^15 Wei, also known as finney.
pub const PWEI: u64 = 1_000_000_000_000_000;
/// 10^18 Wei.
pub const ETHER: u64 = 1_000_000_000_000_000_000;

/// Converts a Wei amount to Ether.
///
/// Lossy by design: an `f64` mantissa cannot carry full Wei precision, and
/// amounts beyond `f64` range come back as infinity. Use the [`BigUint`]
/// value itself for exact arithmetic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn wei_to_ether(wei: &BigUint) -> f64 {
    wei.to_f64().map_or(f64::INFINITY, |value| value / ETHER as f64)
}
