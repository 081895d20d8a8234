//! Loose readings of caller JSON scalars.
//!
//! Request bodies come from loosely typed clients, so numbers may arrive as strings and flags as
//! `0`/`1`. These helpers read such values instead of rejecting the request.

use serde_json::Value;

/// Read a scalar as a number.
///
/// Numbers are taken as they are, booleans are `1`/`0`, and strings are parsed after trimming
/// (a blank string is `0`). `null`, arrays, objects and unparsable strings give `None`.
pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse().ok()
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Truthiness of a JSON value: `false`, `null`, `0`, `NaN` and `""` are false, anything else
/// (including empty arrays and objects) is true.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/json.rs"]
mod tests;
