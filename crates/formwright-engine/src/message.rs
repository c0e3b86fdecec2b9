//! User-facing error text derivation.

use crate::store::FieldFailure;

/// Resolve the display string for a field's validation state.
///
/// No recorded failure yields `None` (no error UI). A failure with an
/// explicit message returns it verbatim. A bare failure falls back to a
/// string derived from the label, or the raw field name when no label
/// exists; the fallback path never yields `None` while a failure is
/// recorded.
pub fn resolve_error(
    name: &str,
    label: Option<&str>,
    failure: Option<&FieldFailure>,
) -> Option<String> {
    let failure = failure?;
    match &failure.message {
        Some(message) => Some(message.clone()),
        None => Some(format!("{} is invalid", label.unwrap_or(name))),
    }
}
