//! Measurement and comparison helpers over `serde_json::Value`.
//!
//! The chain treats `Value` as its universal subject currency, so length
//! derivation, loose equality and type-kind matching all live here and are
//! shared between the chain and the backend.

use serde_json::Value;

use crate::error::ChainError;

/// Element count for containers, character count for strings.
///
/// Returns `None` for values that have no meaningful length (numbers,
/// booleans, null).
pub(crate) fn countable_len(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        // Character count, not byte length: "héllo" measures 5.
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

/// Length derivation used by every terminal that honors the length flag.
pub(crate) fn measured_len(value: &Value) -> Result<usize, ChainError> {
    countable_len(value).ok_or_else(|| {
        ChainError::InvalidArgument(format!("value is not countable: {}", value))
    })
}

/// Numeric-tolerant equality: `1`, `1u64` and `1.0` all compare equal.
/// Everything else falls back to structural equality.
///
/// Integral pairs compare exactly; the lossy f64 path is reserved for
/// int-vs-float pairs, so integers beyond 2^53 keep their full precision.
pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x == y
            } else if x.is_f64() || y.is_f64() {
                match (x.as_f64(), y.as_f64()) {
                    (Some(x), Some(y)) => x == y,
                    _ => false,
                }
            } else {
                // Mixed signed/unsigned outside the shared range.
                false
            }
        }
        _ => a == b,
    }
}

/// Whether `kind` names a recognized value kind.
pub(crate) fn is_known_kind(kind: &str) -> bool {
    matches!(
        kind,
        "string" | "array" | "object" | "number" | "integer" | "float" | "boolean" | "bool"
            | "null"
    )
}

/// Type-kind check behind the `a`/`an` terminal.
///
/// Callers validate `kind` with [`is_known_kind`] first; an unrecognized kind
/// here simply never matches.
pub(crate) fn matches_kind(value: &Value, kind: &str) -> bool {
    match kind {
        "string" => value.is_string(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "float" => value.is_f64(),
        "boolean" | "bool" => value.is_boolean(),
        "null" => value.is_null(),
        _ => false,
    }
}

/// Native emptiness for values that carry no count: null is empty, `false`
/// is empty, zero is empty. Countable values defer to their count.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => countable_len(value) == Some(0),
    }
}
