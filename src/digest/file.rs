//! File digest computation
//!
//! Streams a file through the selected digest algorithm and returns the
//! raw digest bytes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::digest::{DigestAlgorithm, DigestPolicy};
use crate::error::{MetalinkError, Result};

/// Compute a file's digest under the system policy
///
/// Returns the raw digest bytes. Fails with an I/O error if the file
/// cannot be opened or read, and with a policy error if the algorithm
/// cannot be instantiated on this system.
pub fn digest_file(path: impl AsRef<Path>, algorithm: DigestAlgorithm) -> Result<Vec<u8>> {
    digest_file_with_policy(path, algorithm, DigestPolicy::system())
}

/// Compute a file's digest under an explicit policy
pub fn digest_file_with_policy(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
    policy: &DigestPolicy,
) -> Result<Vec<u8>> {
    let path = path.as_ref();
    policy.check(algorithm)?;

    let mut file = File::open(path).map_err(|e| MetalinkError::io(path, e))?;
    match algorithm {
        DigestAlgorithm::Md5 => stream_digest::<Md5>(&mut file, path),
        DigestAlgorithm::Sha1 => stream_digest::<Sha1>(&mut file, path),
        DigestAlgorithm::Sha256 => stream_digest::<Sha256>(&mut file, path),
        DigestAlgorithm::Sha512 => stream_digest::<Sha512>(&mut file, path),
    }
}

fn stream_digest<D: Digest>(file: &mut File, path: &Path) -> Result<Vec<u8>> {
    // 64KB buffer for efficient reading
    let mut buffer = vec![0u8; 64 * 1024];
    let mut hasher = D::new();
    loop {
        let n = file
            .read(&mut buffer)
            .map_err(|e| MetalinkError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hasher.finalize().to_vec())
}
