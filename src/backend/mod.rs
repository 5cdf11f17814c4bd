//! Assertion backend: predicate evaluation and failure signalling.
//!
//! The chain never decides pass/fail itself. Terminals compose a
//! `(effective value, Constraint, description)` triple and hand it to
//! [`assert_that`], which evaluates the constraint and panics with a readable
//! message on mismatch. [`check`] is the non-panicking form for callers that
//! want to inspect the outcome instead.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::Value;

use crate::value::{countable_len, is_empty_value, loose_eq, matches_kind};

/// The closed predicate vocabulary terminals can send to the backend.
///
/// Constraints evaluate to plain `false` on type-mismatched input (an
/// ordering applied to a string, a prefix check applied to an array), so
/// wrapping in [`Constraint::Not`] flips them cleanly.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Numeric-tolerant equality.
    EqualTo(Value),
    /// Strict equality; `1` and `1.0` are different values here.
    IdenticalTo(Value),
    GreaterThan(f64),
    LessThan(f64),
    GreaterOrEqual(f64),
    LessOrEqual(f64),
    /// `|actual - expected| <= delta`.
    CloseTo { expected: f64, delta: f64 },
    /// Substring on strings, element membership on arrays.
    Contains(Value),
    /// Every element of the actual array equals the given value.
    OnlyContains(Value),
    /// Element count (chars for strings) equals `n`.
    CountOf(usize),
    IsEmpty,
    MatchesRegex(Regex),
    StartsWith(String),
    EndsWith(String),
    /// Object key, or index for arrays.
    HasKey(String),
    IsTrue,
    IsFalse,
    IsNull,
    /// Value-kind check; the chain validates the kind name before building this.
    IsType(String),
    /// The actual value is a path naming an existing file or directory.
    FileExists,
    /// Byte-for-byte comparison of the file at the actual path against the
    /// file at the given path. Unreadable files compare unequal.
    FileEquals(PathBuf),
    IsReadable,
    IsWritable,
    Not(Box<Constraint>),
    /// Conjunction; passes when every part passes.
    All(Vec<Constraint>),
}

impl Constraint {
    /// Wrap this constraint in a negation.
    pub fn negated(self) -> Self {
        Constraint::Not(Box::new(self))
    }

    /// Evaluate the constraint against an actual value.
    pub fn holds(&self, actual: &Value) -> bool {
        match self {
            Constraint::EqualTo(expected) => loose_eq(actual, expected),
            Constraint::IdenticalTo(expected) => actual == expected,
            Constraint::GreaterThan(n) => actual.as_f64().is_some_and(|v| v > *n),
            Constraint::LessThan(n) => actual.as_f64().is_some_and(|v| v < *n),
            Constraint::GreaterOrEqual(n) => actual.as_f64().is_some_and(|v| v >= *n),
            Constraint::LessOrEqual(n) => actual.as_f64().is_some_and(|v| v <= *n),
            Constraint::CloseTo { expected, delta } => actual
                .as_f64()
                .is_some_and(|v| (v - expected).abs() <= *delta),
            Constraint::Contains(needle) => match actual {
                Value::String(haystack) => needle
                    .as_str()
                    .is_some_and(|needle| haystack.contains(needle)),
                Value::Array(items) => items.iter().any(|item| loose_eq(item, needle)),
                _ => false,
            },
            Constraint::OnlyContains(needle) => match actual {
                Value::Array(items) => items.iter().all(|item| loose_eq(item, needle)),
                _ => false,
            },
            Constraint::CountOf(n) => countable_len(actual) == Some(*n),
            Constraint::IsEmpty => is_empty_value(actual),
            Constraint::MatchesRegex(re) => actual.as_str().is_some_and(|s| re.is_match(s)),
            Constraint::StartsWith(prefix) => {
                actual.as_str().is_some_and(|s| s.starts_with(prefix))
            }
            Constraint::EndsWith(suffix) => actual.as_str().is_some_and(|s| s.ends_with(suffix)),
            Constraint::HasKey(key) => match actual {
                Value::Object(map) => map.contains_key(key),
                Value::Array(items) => key
                    .parse::<usize>()
                    .is_ok_and(|index| index < items.len()),
                _ => false,
            },
            Constraint::IsTrue => actual == &Value::Bool(true),
            Constraint::IsFalse => actual == &Value::Bool(false),
            Constraint::IsNull => actual.is_null(),
            Constraint::IsType(kind) => matches_kind(actual, kind),
            Constraint::FileExists => actual.as_str().is_some_and(|path| Path::new(path).exists()),
            Constraint::FileEquals(expected_path) => actual.as_str().is_some_and(|path| {
                match (fs::read(path), fs::read(expected_path)) {
                    (Ok(actual_bytes), Ok(expected_bytes)) => actual_bytes == expected_bytes,
                    _ => false,
                }
            }),
            Constraint::IsReadable => actual.as_str().is_some_and(is_readable),
            Constraint::IsWritable => actual.as_str().is_some_and(|path| {
                fs::metadata(path).is_ok_and(|meta| !meta.permissions().readonly())
            }),
            Constraint::Not(inner) => !inner.holds(actual),
            Constraint::All(parts) => parts.iter().all(|part| part.holds(actual)),
        }
    }

    /// Human-readable phrase completing "expected value to ...".
    pub fn describe(&self) -> String {
        match self {
            Constraint::EqualTo(expected) => format!("equal `{}`", expected),
            Constraint::IdenticalTo(expected) => format!("be identical to `{}`", expected),
            Constraint::GreaterThan(n) => format!("be above {}", n),
            Constraint::LessThan(n) => format!("be below {}", n),
            Constraint::GreaterOrEqual(n) => format!("be at least {}", n),
            Constraint::LessOrEqual(n) => format!("be at most {}", n),
            Constraint::CloseTo { expected, delta } => {
                format!("be within {} of {}", delta, expected)
            }
            Constraint::Contains(needle) => format!("contain `{}`", needle),
            Constraint::OnlyContains(needle) => format!("contain only `{}`", needle),
            Constraint::CountOf(n) => format!("have a count of {}", n),
            Constraint::IsEmpty => "be empty".to_string(),
            Constraint::MatchesRegex(re) => format!("match /{}/", re.as_str()),
            Constraint::StartsWith(prefix) => format!("start with `{}`", prefix),
            Constraint::EndsWith(suffix) => format!("end with `{}`", suffix),
            Constraint::HasKey(key) => format!("have the property `{}`", key),
            Constraint::IsTrue => "be true".to_string(),
            Constraint::IsFalse => "be false".to_string(),
            Constraint::IsNull => "be null".to_string(),
            Constraint::IsType(kind) => format!("be a {}", kind),
            Constraint::FileExists => "name an existing path".to_string(),
            Constraint::FileEquals(path) => {
                format!("have the same contents as {}", path.display())
            }
            Constraint::IsReadable => "name a readable path".to_string(),
            Constraint::IsWritable => "name a writable path".to_string(),
            Constraint::Not(inner) => format!("not {}", inner.describe()),
            Constraint::All(parts) => parts
                .iter()
                .map(Constraint::describe)
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

fn is_readable(path: &str) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => fs::read_dir(path).is_ok(),
        Ok(_) => fs::File::open(path).is_ok(),
        Err(_) => false,
    }
}

/// Result of evaluating a constraint.
#[derive(Debug, Clone)]
pub struct AssertionResult {
    /// Whether the constraint held.
    pub passed: bool,
    /// Description of what was asserted.
    pub description: String,
    /// Failure reason if the assertion failed.
    pub reason: Option<String>,
}

impl AssertionResult {
    /// Create a passing assertion result.
    pub(crate) fn pass(description: impl Into<String>) -> Self {
        Self {
            passed: true,
            description: description.into(),
            reason: None,
        }
    }

    /// Create a failing assertion result.
    pub(crate) fn fail(description: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            description: description.into(),
            reason: Some(reason.into()),
        }
    }
}

/// Evaluate a constraint without panicking.
pub fn check(actual: &Value, constraint: &Constraint, description: &str) -> AssertionResult {
    let what = if description.is_empty() {
        format!("value to {}", constraint.describe())
    } else {
        format!("{}: value to {}", description, constraint.describe())
    };

    if constraint.holds(actual) {
        AssertionResult::pass(what)
    } else {
        AssertionResult::fail(what, format!("actual: `{}`", actual))
    }
}

/// Evaluate a constraint, panicking with a detailed message on failure.
///
/// The panic is the test-failure signal; it must propagate uncaught to the
/// test runner.
///
/// # Panics
///
/// Panics if the constraint does not hold for the actual value.
pub fn assert_that(actual: &Value, constraint: &Constraint, description: &str) {
    let result = check(actual, constraint, description);
    if !result.passed {
        let reason = result.reason.as_deref().unwrap_or("unknown reason");
        panic!(
            "assertion failed: expected {}\n\n  {}\n",
            result.description, reason
        );
    }
}
