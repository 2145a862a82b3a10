//! Content digests used to identify URLs and payloads.

use sha2::{Digest, Sha256};

use super::constants::HASH_PREFIX_LEN;

/// Full lowercase hex SHA-256 of `bytes`.
pub(crate) fn hex_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// First [`HASH_PREFIX_LEN`] hex characters of the digest of `bytes`.
pub(crate) fn hash_prefix(bytes: &[u8]) -> String {
    let mut digest = hex_digest(bytes);
    digest.truncate(HASH_PREFIX_LEN);
    digest
}
