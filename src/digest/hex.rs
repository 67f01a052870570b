//! Hex digest validation and decoding

use crate::error::{MetalinkError, Result};

/// Check whether `value` is a plausible hex rendering of a digest
///
/// True iff every character is an ASCII hex digit and the length is exactly
/// `2 * digest_len`. Never fails; malformed values are simply not valid.
pub fn is_valid_hex_digest(value: &str, digest_len: usize) -> bool {
    value.len() == digest_len * 2 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decode a hex digest string into raw bytes
///
/// Callers are expected to run [`is_valid_hex_digest`] first; a decode
/// failure here means the value was never validated.
pub fn decode_hex_digest(value: &str) -> Result<Vec<u8>> {
    hex::decode(value)
        .map_err(|e| MetalinkError::invalid_parameter("hex digest", e.to_string()))
}
