//! Utility modules.

/// Serde helpers for money amounts the API sends as strings.
pub mod amount;

/// Log sanitization utilities to keep secrets and large bodies out of logs.
pub mod log_sanitizer;
