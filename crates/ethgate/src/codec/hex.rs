//! Hex-integer wire conversions.

use super::DecodeError;
use num::{BigUint, Num, Zero};

/// Decodes a wire-encoded integer into a [`BigUint`].
///
/// Empty input decodes to zero: gateways serialize absent numeric fields as
/// `""`, and that is a value, not an error. A `0x`/`0X` prefix selects
/// hexadecimal; unprefixed input is read as decimal.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidHexInt`] carrying the raw text when the
/// input is non-empty and not a valid integer literal (including negative
/// values — wire quantities are unsigned).
pub fn decode_hex_int(text: &str) -> Result<BigUint, DecodeError> {
    if text.is_empty() {
        return Ok(BigUint::zero());
    }

    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => BigUint::from_str_radix(digits, 16),
        None => BigUint::from_str_radix(text, 10),
    };

    parsed.map_err(|_| DecodeError::InvalidHexInt(text.to_string()))
}

/// Encodes a [`BigUint`] as a lowercase `0x`-prefixed hex string.
///
/// No padding beyond the minimal digits: 255 encodes as `"0xff"`, zero as
/// `"0x0"`.
#[must_use]
pub fn encode_hex_int(value: &BigUint) -> String {
    format!("{value:#x}")
}
