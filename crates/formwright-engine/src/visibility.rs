//! Visibility evaluation for conditional fields.

use schema::{DisplayRule, Error, Values};

/// Whether a field should render under the current snapshot.
///
/// A field without a rule is always visible. Rules receive the full value
/// snapshot, not just the field's own value, so they may depend on sibling
/// fields. Visibility is derived, never cached: the engine re-runs this on
/// every change notification. A predicate failure propagates to the caller;
/// the engine neither retries nor swallows it.
pub fn is_visible(
    name: &str,
    rule: Option<&DisplayRule>,
    values: &Values,
) -> Result<bool, Error> {
    match rule {
        Some(rule) => rule.evaluate(name, values),
        None => Ok(true),
    }
}
