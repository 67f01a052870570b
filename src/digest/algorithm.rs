//! Digest algorithm registry
//!
//! Maps the `type` names found in metalink documents onto the supported
//! digest algorithms and ranks them by cryptographic strength.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported digest algorithms, ordered weakest to strongest
///
/// The derived `Ord` is the strength ranking used to decide which declared
/// hash a payload is verified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// MD5 (128-bit, collision-broken; kept for legacy mirror metadata)
    Md5,
    /// SHA-1 (160-bit, deprecated)
    Sha1,
    /// SHA-256 (256-bit)
    Sha256,
    /// SHA-512 (512-bit)
    Sha512,
}

/// Recognized `type` attribute spellings, sorted for binary search.
/// Mirror generators disagree on the separator, so both forms resolve.
const ALGORITHM_ALIASES: &[(&str, DigestAlgorithm)] = &[
    ("md5", DigestAlgorithm::Md5),
    ("sha-1", DigestAlgorithm::Sha1),
    ("sha-256", DigestAlgorithm::Sha256),
    ("sha-512", DigestAlgorithm::Sha512),
    ("sha1", DigestAlgorithm::Sha1),
    ("sha256", DigestAlgorithm::Sha256),
    ("sha512", DigestAlgorithm::Sha512),
];

impl DigestAlgorithm {
    /// Look up an algorithm by its declared type name
    ///
    /// Matching is exact and case-sensitive. Unknown names return `None`
    /// rather than an error: documents may legally declare digest types
    /// newer than this build supports, and those entries are skipped.
    pub fn from_name(name: &str) -> Option<Self> {
        ALGORITHM_ALIASES
            .binary_search_by_key(&name, |&(alias, _)| alias)
            .ok()
            .map(|index| ALGORITHM_ALIASES[index].1)
    }

    /// Canonical lowercase name, matching the serialized form
    pub fn canonical_name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Raw digest length in bytes
    pub fn digest_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Md5 => write!(f, "MD5"),
            DigestAlgorithm::Sha1 => write!(f, "SHA1"),
            DigestAlgorithm::Sha256 => write!(f, "SHA256"),
            DigestAlgorithm::Sha512 => write!(f, "SHA512"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_table_is_sorted() {
        // binary_search_by_key requires this
        for pair in ALGORITHM_ALIASES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_lookup_known_aliases() {
        assert_eq!(DigestAlgorithm::from_name("md5"), Some(DigestAlgorithm::Md5));
        assert_eq!(DigestAlgorithm::from_name("sha1"), Some(DigestAlgorithm::Sha1));
        assert_eq!(DigestAlgorithm::from_name("sha-1"), Some(DigestAlgorithm::Sha1));
        assert_eq!(DigestAlgorithm::from_name("sha256"), Some(DigestAlgorithm::Sha256));
        assert_eq!(DigestAlgorithm::from_name("sha-256"), Some(DigestAlgorithm::Sha256));
        assert_eq!(DigestAlgorithm::from_name("sha512"), Some(DigestAlgorithm::Sha512));
        assert_eq!(DigestAlgorithm::from_name("sha-512"), Some(DigestAlgorithm::Sha512));
    }

    #[test]
    fn test_lookup_unknown_names() {
        assert_eq!(DigestAlgorithm::from_name(""), None);
        assert_eq!(DigestAlgorithm::from_name("sha3-256"), None);
        assert_eq!(DigestAlgorithm::from_name("crc32"), None);
        // Matching is case-sensitive
        assert_eq!(DigestAlgorithm::from_name("SHA256"), None);
        assert_eq!(DigestAlgorithm::from_name("Md5"), None);
    }

    #[test]
    fn test_strength_ordering() {
        assert!(DigestAlgorithm::Md5 < DigestAlgorithm::Sha1);
        assert!(DigestAlgorithm::Sha1 < DigestAlgorithm::Sha256);
        assert!(DigestAlgorithm::Sha256 < DigestAlgorithm::Sha512);

        let strongest = [
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Md5,
            DigestAlgorithm::Sha512,
            DigestAlgorithm::Sha1,
        ]
        .into_iter()
        .max();
        assert_eq!(strongest, Some(DigestAlgorithm::Sha512));
    }

    #[test]
    fn test_digest_lengths() {
        assert_eq!(DigestAlgorithm::Md5.digest_len(), 16);
        assert_eq!(DigestAlgorithm::Sha1.digest_len(), 20);
        assert_eq!(DigestAlgorithm::Sha256.digest_len(), 32);
        assert_eq!(DigestAlgorithm::Sha512.digest_len(), 64);
    }

    #[test]
    fn test_canonical_name_round_trips() {
        for algorithm in [
            DigestAlgorithm::Md5,
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha512,
        ] {
            assert_eq!(
                DigestAlgorithm::from_name(algorithm.canonical_name()),
                Some(algorithm)
            );
        }
    }
}
