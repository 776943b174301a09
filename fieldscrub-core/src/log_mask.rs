//! Masking of field values in debug logs.
//!
//! Records routinely carry personal data, so raw field values only reach the
//! logs when `FIELDSCRUB_ALLOW_DEBUG_PII=true` is set in the environment.

use lazy_static::lazy_static;

lazy_static! {
    /// Read once; changing the variable later in the process has no effect.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("FIELDSCRUB_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

/// The form of `value` that may be written to a debug log.
pub fn loggable(value: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        format!("{:?}", value)
    } else {
        redact_sensitive(value)
    }
}
