//! Short content digests used to keep truncated labels unique

use sha1::{Digest, Sha1};

/// Number of hex characters kept from the digest
pub const HASH_LENGTH: usize = 6;

/// Compute the short digest of `{model}{separator}{app}`.
///
/// Returns the first [`HASH_LENGTH`] lowercase hex characters of the SHA-1 of
/// the joined, untruncated names.
pub fn content_digest(model: &str, separator: &str, app: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(model.as_bytes());
    hasher.update(separator.as_bytes());
    hasher.update(app.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(HASH_LENGTH);
    hex
}
