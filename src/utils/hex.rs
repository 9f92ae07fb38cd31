use num_bigint::BigUint;
use serde::Serializer;

use crate::error::{HexParseError, HexParseErrorKind};

const PREFIX: &str = "0x";

/// Decode a `0x`-prefixed hex quantity into an exact unsigned integer.
///
/// Any number of digits is accepted, so quantities wider than 64 bits
/// (total difficulty, wei balances) keep their full value. Leading zeros
/// are allowed. The prefix must be lowercase `0x`; digits may be mixed case.
pub fn decode_quantity(input: &str) -> Result<BigUint, HexParseError> {
    let error = |kind| HexParseError {
        input: input.to_string(),
        kind,
    };

    let digits = input
        .strip_prefix(PREFIX)
        .ok_or_else(|| error(HexParseErrorKind::MissingPrefix))?;
    if digits.is_empty() {
        return Err(error(HexParseErrorKind::NoDigits));
    }
    // `BigUint::parse_bytes` tolerates `_` separators, so check digits first.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(error(HexParseErrorKind::InvalidDigit));
    }

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| error(HexParseErrorKind::InvalidDigit))
}

/// Encode an integer as a minimal `0x`-prefixed lowercase hex quantity (`0x0` for zero).
pub fn encode_quantity(value: &BigUint) -> String {
    format!("{PREFIX}{value:x}")
}

/// `serialize_with` helper so records render integers the way the upstream API does.
pub fn serialize_quantity<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode_quantity(value))
}
