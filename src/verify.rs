//! Best-hash selection and payload verification
//!
//! Given a parsed document and a payload path, picks the strongest digest
//! algorithm among the declared hashes and verifies the payload against
//! the declarations of that strength.

use std::path::Path;

use crate::digest::{self, DigestAlgorithm, DigestPolicy};
use crate::document::MetalinkDocument;
use crate::error::{DocumentErrorKind, MetalinkError, Result};

/// Verify a payload file against a document's declared digests
///
/// Tolerance rules:
/// - unknown declared digest types are skipped, never fatal
/// - every declaration of the winning strength is a candidate; one with a
///   malformed hex value is skipped so a well-formed sibling can still
///   match
/// - verification never falls back to a weaker algorithm, even when the
///   active policy forbids the winning one
pub fn verify_payload(document: &MetalinkDocument, path: impl AsRef<Path>) -> Result<()> {
    verify_payload_with_policy(document, path, DigestPolicy::system())
}

/// Like [`verify_payload`], with an explicit algorithm policy
pub fn verify_payload_with_policy(
    document: &MetalinkDocument,
    path: impl AsRef<Path>,
    policy: &DigestPolicy,
) -> Result<()> {
    let path = path.as_ref();

    // Selection pass: strongest recognized algorithm among the declarations
    let mut best: Option<DigestAlgorithm> = None;
    for declaration in document.hashes() {
        match declaration.algorithm() {
            Some(algorithm) => best = Some(best.map_or(algorithm, |b| b.max(algorithm))),
            None => tracing::debug!(
                "Skipping unsupported digest type: {}",
                declaration.type_name()
            ),
        }
    }
    let algorithm = match best {
        Some(algorithm) => algorithm,
        None => {
            return Err(MetalinkError::document(
                DocumentErrorKind::NoVerifiableDigest,
                format!(
                    "no supported digest declared for '{}'",
                    document.file_name()
                ),
            ));
        }
    };

    // Verification pass: collect the hex-valid candidates of that strength
    let mut candidates = Vec::new();
    for declaration in document.hashes() {
        if declaration.algorithm() != Some(algorithm) {
            continue;
        }
        if digest::is_valid_hex_digest(declaration.value(), algorithm.digest_len()) {
            candidates.push(digest::decode_hex_digest(declaration.value())?);
        } else {
            tracing::warn!(
                "Skipping malformed {} digest for {}: {:?}",
                algorithm,
                document.file_name(),
                declaration.value()
            );
        }
    }
    if candidates.is_empty() {
        // Digests of the winning strength were declared but none could
        // be attempted; the payload stays unverified.
        tracing::warn!(
            "No usable {} digest for {}, rejecting unverified payload",
            algorithm,
            document.file_name()
        );
        return Err(MetalinkError::ChecksumMismatch {
            path: path.to_path_buf(),
        });
    }

    let actual = digest::digest_file_with_policy(path, algorithm, policy)?;
    if candidates.iter().any(|expected| *expected == actual) {
        tracing::debug!("Verified {} with {}", path.display(), algorithm);
        return Ok(());
    }

    tracing::warn!(
        "Checksum mismatch validating {} with {}",
        path.display(),
        algorithm
    );
    Err(MetalinkError::ChecksumMismatch {
        path: path.to_path_buf(),
    })
}
