//! URL normalization.
//!
//! Guarantees that every URL entering the registry carries a scheme prefix.
//! Submissions without one (`example.com/a`) get `http://` prepended;
//! submissions that cannot be parsed as a URL afterwards are rejected.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Recognized scheme prefixes that are preserved as-is.
const RECOGNIZED_SCHEMES: &[&str] = &["http://", "https://"];

/// Normalizes a URL for registration.
///
/// # Normalization Rules
///
/// 1. Empty input is rejected
/// 2. Input without a recognized scheme prefix gets `http://` prepended
/// 3. The result must parse as a URL
///
/// The returned string is the prefixed input, not a re-serialized parse
/// result: what the caller submitted is what the registry stores and the
/// redirect later sends.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Missing`] for empty input.
/// Returns [`UrlNormalizationError::InvalidFormat`] for input that does not
/// parse as a URL even after the prefix is applied.
///
/// # Examples
///
/// ```
/// use linkmap::utils::url_normalizer::normalize_url;
///
/// assert_eq!(
///     normalize_url("example.com/a").unwrap(),
///     "http://example.com/a"
/// );
/// assert_eq!(
///     normalize_url("https://example.com/a").unwrap(),
///     "https://example.com/a"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input.is_empty() {
        return Err(UrlNormalizationError::Missing);
    }

    let normalized = if has_recognized_scheme(input) {
        input.to_string()
    } else {
        format!("http://{}", input)
    };

    // Parse only to reject garbage; the prefixed string itself is stored.
    Url::parse(&normalized).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    Ok(normalized)
}

fn has_recognized_scheme(input: &str) -> bool {
    RECOGNIZED_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
