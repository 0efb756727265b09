//! Digest computation for comparison inputs.
//!
//! Digests identify a comparison by content: the same texts and options
//! always produce the same key, and any change to either produces a new one.

use redline_core::config::CompareOptions;
use redline_core::errors::Result;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 digest of a document (64 characters).
///
/// ```
/// use redline_engine::digest::compute_content_digest;
///
/// let digest = compute_content_digest("1. Term");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, compute_content_digest("1. Term"));
/// ```
pub fn compute_content_digest(text: &str) -> String {
    hash_string(text)
}

/// Digest of the options that influence comparison output.
///
/// ## Errors
///
/// Returns `Serialization` if JSON serialization fails.
pub fn compute_options_digest(options: &CompareOptions) -> Result<String> {
    // The cache bound does not change the result of a comparison
    let mut canonical_options = options.clone();
    canonical_options.cache_entries = 0;

    let canonical = serde_json::to_string(&canonical_options)?;
    Ok(hash_string(&canonical))
}

/// Cache key over the three component digests.
pub fn compute_comparison_key(
    original_digest: &str,
    modified_digest: &str,
    options_digest: &str,
) -> String {
    hash_string(&format!(
        "{}:{}:{}",
        original_digest, modified_digest, options_digest
    ))
}

fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_core::view::ViewMode;

    #[test]
    fn test_content_digest_known_value() {
        assert_eq!(
            compute_content_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_options_digest_ignores_cache_bound() {
        let a = CompareOptions::default();
        let b = CompareOptions {
            cache_entries: 3,
            ..CompareOptions::default()
        };
        assert_eq!(
            compute_options_digest(&a).unwrap(),
            compute_options_digest(&b).unwrap()
        );
    }

    #[test]
    fn test_options_digest_sensitive_to_view() {
        let a = CompareOptions::default();
        let b = CompareOptions {
            view: ViewMode::Word,
            ..CompareOptions::default()
        };
        assert_ne!(
            compute_options_digest(&a).unwrap(),
            compute_options_digest(&b).unwrap()
        );
    }

    #[test]
    fn test_comparison_key_order_sensitive() {
        let x = compute_content_digest("x");
        let y = compute_content_digest("y");
        let o = compute_options_digest(&CompareOptions::default()).unwrap();
        assert_ne!(compute_comparison_key(&x, &y, &o), compute_comparison_key(&y, &x, &o));
    }
}
