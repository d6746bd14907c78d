//! Shape predicates evaluated at every validation point.
//!
//! Construction checks the initial state and dispatch checks the action
//! with the same predicates, so a value is accepted or rejected for the
//! same reason everywhere.

use super::record::Record;

/// Check whether a value has the shape of a structured record.
///
/// # Example
///
/// ```rust
/// use reduxo::core::validate::is_record;
/// use serde_json::json;
///
/// assert!(is_record(&json!({})));
/// assert!(is_record(&json!({"type": "change"})));
/// assert!(!is_record(&json!(null)));
/// assert!(!is_record(&json!([1, 2, 3])));
/// ```
pub fn is_record<R: Record>(value: &R) -> bool {
    value.is_record()
}

/// Require a value to be a structured record.
///
/// On failure the error is built from the value's [`Record::kind`], so
/// callers decide which error variant a mismatch maps to.
///
/// # Example
///
/// ```rust
/// use reduxo::core::validate::ensure_record;
/// use serde_json::json;
///
/// let ok: Result<(), String> = ensure_record(&json!({"a": 1}), |found| found.to_string());
/// assert!(ok.is_ok());
///
/// let err = ensure_record(&json!("text"), |found| found.to_string());
/// assert_eq!(err, Err("string".to_string()));
/// ```
pub fn ensure_record<R, E, F>(value: &R, on_mismatch: F) -> Result<(), E>
where
    R: Record,
    F: FnOnce(&'static str) -> E,
{
    if is_record(value) {
        Ok(())
    } else {
        Err(on_mismatch(value.kind()))
    }
}
