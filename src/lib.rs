//! # metalink-verify
//!
//! Metalink metadata parsing and payload integrity verification.
//!
//! ## Features
//!
//! - **Streaming parser**: SAX-style event parsing of metalink XML into a
//!   typed document model
//! - **Strongest-digest selection**: picks the best declared algorithm
//!   (MD5 < SHA-1 < SHA-256 < SHA-512) and never falls back to a weaker one
//! - **Fault tolerant**: unknown digest types and malformed sibling
//!   declarations are skipped without ever accepting an unverified payload
//! - **Compliance aware**: FIPS mode detection with a distinct error when
//!   MD5 verification is forbidden
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use metalink_verify::{verify_payload, MetalinkDocument};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = MetalinkDocument::parse_file("pkg.rpm.metalink", "pkg.rpm")?;
//!
//!     // Pick a mirror by preference; fetching is up to the caller
//!     let mut mirrors: Vec<_> = document.urls().iter().collect();
//!     mirrors.sort_by_key(|url| std::cmp::Reverse(url.preference()));
//!
//!     // ... download pkg.rpm from mirrors[0] ...
//!
//!     verify_payload(&document, "pkg.rpm")?;
//!     Ok(())
//! }
//! ```

// Modules
pub mod digest;
pub mod document;
pub mod error;
mod parser;
pub mod verify;

// Re-exports for convenience
pub use self::digest::{digest_file, digest_file_with_policy, DigestAlgorithm, DigestPolicy};
pub use document::{HashDeclaration, MetalinkDocument, UrlDeclaration};
pub use error::{DocumentErrorKind, MetalinkError, Result};
pub use verify::{verify_payload, verify_payload_with_policy};
