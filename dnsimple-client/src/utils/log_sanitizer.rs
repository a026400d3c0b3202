//! Log sanitization utilities
//!
//! Response bodies can carry private keys (certificate endpoints) and OAuth
//! tokens, so they are truncated before they reach debug logs, and secrets
//! are masked whenever credentials are described in a log line.

/// Maximum number of bytes of a body included in a log line.
const TRUNCATE_LIMIT: usize = 512;

/// Number of leading characters of a secret kept visible by [`mask_secret`].
const MASK_VISIBLE: usize = 4;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0)
}

/// Truncate a response/request body for logging.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret (token, password) leaving only a short prefix visible.
///
/// `"SomeMagicToken"` -> `"Some**********"`. Secrets no longer than the
/// visible prefix are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= MASK_VISIBLE {
        return "*".repeat(count);
    }
    let visible: String = secret.chars().take(MASK_VISIBLE).collect();
    format!("{visible}{}", "*".repeat(count - MASK_VISIBLE))
}
