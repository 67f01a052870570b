//! Digest algorithm policy
//!
//! Captures which algorithms the runtime environment allows. On FIPS-mode
//! systems MD5 cannot be instantiated at all; embedders can additionally
//! disable algorithms they consider too weak.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::digest::DigestAlgorithm;
use crate::error::{MetalinkError, Result};

/// Kernel flag the system crypto libraries key their FIPS mode off
const FIPS_MODE_FLAG: &str = "/proc/sys/crypto/fips_enabled";

/// Restrictions on which digest algorithms may be instantiated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestPolicy {
    /// Restricted compliance mode: MD5 is forbidden outright
    fips_mode: bool,

    /// Algorithms disabled by the embedder
    #[serde(default)]
    disabled: Vec<DigestAlgorithm>,
}

impl DigestPolicy {
    /// Policy that allows every supported algorithm
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Policy for restricted compliance mode
    pub fn fips() -> Self {
        Self {
            fips_mode: true,
            disabled: Vec::new(),
        }
    }

    /// The policy detected for this system, resolved once per process
    pub fn system() -> &'static DigestPolicy {
        static SYSTEM_POLICY: OnceLock<DigestPolicy> = OnceLock::new();
        SYSTEM_POLICY.get_or_init(|| {
            if fips_mode_enabled() {
                tracing::info!("FIPS mode detected, MD5 verification is disabled");
                DigestPolicy::fips()
            } else {
                DigestPolicy::permissive()
            }
        })
    }

    /// Disable an algorithm regardless of compliance mode
    pub fn disable(mut self, algorithm: DigestAlgorithm) -> Self {
        if !self.disabled.contains(&algorithm) {
            self.disabled.push(algorithm);
        }
        self
    }

    /// Check whether an algorithm may be instantiated under this policy
    pub fn allows(&self, algorithm: DigestAlgorithm) -> bool {
        self.check(algorithm).is_ok()
    }

    /// Like [`allows`](Self::allows), but reports why the algorithm is unusable
    pub fn check(&self, algorithm: DigestAlgorithm) -> Result<()> {
        if self.fips_mode && algorithm == DigestAlgorithm::Md5 {
            return Err(MetalinkError::ComplianceModeForbidden { algorithm });
        }
        if self.disabled.contains(&algorithm) {
            return Err(MetalinkError::AlgorithmUnavailable {
                algorithm,
                message: "disabled by policy".to_string(),
            });
        }
        Ok(())
    }
}

fn fips_mode_enabled() -> bool {
    std::fs::read_to_string(FIPS_MODE_FLAG)
        .map(|contents| contents.trim() == "1")
        .unwrap_or(false)
}
