//! Digest algorithms, policy, and file hashing
//!
//! This module contains everything below the verification protocol:
//! - The registry mapping declared type names to algorithms
//! - Hex digest validation and decoding
//! - The policy describing which algorithms this environment allows
//! - Streaming file digest computation

mod algorithm;
mod file;
mod hex;
mod policy;

pub use algorithm::DigestAlgorithm;
pub use file::{digest_file, digest_file_with_policy};
pub use self::hex::{decode_hex_digest, is_valid_hex_digest};
pub use policy::DigestPolicy;
