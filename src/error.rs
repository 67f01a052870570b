//! Typed error hierarchy for metalink-verify
//!
//! Every error type carries enough context to tell a caller which part of
//! the metadata or payload was at fault.

use std::path::PathBuf;
use thiserror::Error;

use crate::digest::DigestAlgorithm;

/// Main error type for metalink processing
#[derive(Debug, Error)]
pub enum MetalinkError {
    /// Invalid input from the caller, or a document value that cannot be used
    #[error("Invalid parameter for '{field}': {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    /// Structurally invalid metalink document
    #[error("Invalid metalink document: {message}")]
    Document {
        kind: DocumentErrorKind,
        message: String,
    },

    /// The input is not well-formed XML
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// Filesystem errors while reading metadata or payload files
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The required digest algorithm is disabled by the active policy
    #[error("Digest algorithm {algorithm} is unavailable: {message}")]
    AlgorithmUnavailable {
        algorithm: DigestAlgorithm,
        message: String,
    },

    /// The compliance mode in effect forbids the required digest algorithm
    #[error("Digest algorithm {algorithm} is forbidden while FIPS mode is enabled")]
    ComplianceModeForbidden { algorithm: DigestAlgorithm },

    /// No declared digest matched the payload
    #[error("Checksum mismatch for {path:?}")]
    ChecksumMismatch { path: PathBuf },
}

/// Document error subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentErrorKind {
    /// A required attribute is missing or out of range
    MissingAttribute,
    /// A required element or its content never appeared
    MissingContent,
    /// The document describes a different file than the one requested
    FilenameMismatch,
    /// No declared hash uses an algorithm this build recognizes
    NoVerifiableDigest,
}

impl MetalinkError {
    /// Check if this error means the payload failed integrity checking,
    /// as opposed to the metadata or environment being unusable
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::ChecksumMismatch { .. })
    }

    /// Create a document error
    pub fn document(kind: DocumentErrorKind, message: impl Into<String>) -> Self {
        Self::Document {
            kind,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for metalink operations
pub type Result<T> = std::result::Result<T, MetalinkError>;

// Implement From traits for common error types

impl From<std::io::Error> for MetalinkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<xml::reader::Error> for MetalinkError {
    fn from(err: xml::reader::Error) -> Self {
        Self::MalformedXml(err.to_string())
    }
}
