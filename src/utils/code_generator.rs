//! Deterministic short code derivation.
//!
//! Codes are a pure function of the normalized URL: SHA-256 of the URL
//! bytes, truncated to the first [`CODE_HASH_BYTES`] bytes and rendered as
//! URL-safe base64 without padding. The same URL always maps to the same
//! code, within a process and across processes.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept for the code. 8 bytes (64 bits) keeps
/// accidental collisions between distinct URLs vanishingly unlikely while
/// encoding to an 11-character code.
const CODE_HASH_BYTES: usize = 8;

/// Derives the short code for a normalized URL.
///
/// The mapping is deterministic and side-effect free, so the code doubles
/// as the registry lookup key. It is not reversible and not
/// cryptographically meaningful beyond collision resistance.
///
/// # Examples
///
/// ```
/// use linkmap::utils::code_generator::generate_code;
///
/// let a = generate_code("http://example.com/a");
/// let b = generate_code("http://example.com/a");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 11);
/// ```
pub fn generate_code(normalized_url: &str) -> String {
    let digest = Sha256::digest(normalized_url.as_bytes());

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..CODE_HASH_BYTES])
}
