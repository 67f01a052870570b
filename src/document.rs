//! Metalink Document Model
//!
//! In-memory representation of one parsed metalink document: the target
//! filename, the declared payload size, and the declared hash and mirror
//! URL entries in document order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::digest::DigestAlgorithm;
use crate::error::{MetalinkError, Result};
use crate::parser;

/// One `<hash>` entry from a metalink document
///
/// The type name is kept as declared; resolution against the algorithm
/// registry happens at verification time so that unknown future types
/// survive parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashDeclaration {
    #[serde(rename = "type")]
    type_name: String,
    value: String,
}

impl HashDeclaration {
    pub(crate) fn new(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    /// Declared type name, as written in the document
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Hex digest value, as written in the document
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Resolve the declared type against the algorithm registry
    pub fn algorithm(&self) -> Option<DigestAlgorithm> {
        DigestAlgorithm::from_name(&self.type_name)
    }
}

/// One `<url>` entry from a metalink document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlDeclaration {
    protocol: Option<String>,
    #[serde(rename = "type")]
    url_type: Option<String>,
    location: Option<String>,
    preference: u32,
    url: String,
}

impl UrlDeclaration {
    pub(crate) fn new(
        protocol: Option<String>,
        url_type: Option<String>,
        location: Option<String>,
        preference: u32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            protocol,
            url_type,
            location,
            preference,
            url: url.into(),
        }
    }

    /// Transport protocol, e.g. "https", if declared
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Mirror type, e.g. "http" or "rsync", if declared
    pub fn url_type(&self) -> Option<&str> {
        self.url_type.as_deref()
    }

    /// Geographic location code, if declared
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Mirror priority weight in 0..=100, 0 if not declared
    pub fn preference(&self) -> u32 {
        self.preference
    }

    /// The mirror URL itself
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A parsed metalink document for one target file
///
/// Produced by [`parse`](Self::parse), which only returns documents whose
/// filename matched the caller's expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalinkDocument {
    file_name: String,
    size: Option<u64>,
    hashes: Vec<HashDeclaration>,
    urls: Vec<UrlDeclaration>,
}

impl MetalinkDocument {
    pub(crate) fn new() -> Self {
        Self {
            file_name: String::new(),
            size: None,
            hashes: Vec::new(),
            urls: Vec::new(),
        }
    }

    /// Parse a metalink document from raw bytes
    ///
    /// `expected_file_name` is the payload the caller is looking for; a
    /// document describing any other file is rejected, which guards
    /// against serving mismatched metadata for a payload.
    pub fn parse(bytes: &[u8], expected_file_name: &str) -> Result<Self> {
        parser::parse_document(bytes, expected_file_name)
    }

    /// Read and parse a metalink file from disk
    pub fn parse_file(path: impl AsRef<Path>, expected_file_name: &str) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| MetalinkError::io(path, e))?;
        Self::parse(&bytes, expected_file_name)
    }

    /// The target filename the document describes
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declared payload size in bytes, if the document carries one
    ///
    /// The size is informational at this layer; callers wanting a cheap
    /// pre-check can compare it against the payload before digesting.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Declared hashes, in document order
    pub fn hashes(&self) -> &[HashDeclaration] {
        &self.hashes
    }

    /// Declared mirror URLs, in document order
    pub fn urls(&self) -> &[UrlDeclaration] {
        &self.urls
    }

    pub(crate) fn has_file_name(&self) -> bool {
        !self.file_name.is_empty()
    }

    pub(crate) fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = name.into();
    }

    pub(crate) fn set_size(&mut self, size: u64) {
        self.size = Some(size);
    }

    pub(crate) fn push_hash(&mut self, declaration: HashDeclaration) {
        self.hashes.push(declaration);
    }

    pub(crate) fn push_url(&mut self, declaration: UrlDeclaration) {
        self.urls.push(declaration);
    }
}
