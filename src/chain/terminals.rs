//! Terminal operations: resolve the chain into one backend assertion.
//!
//! Every terminal follows the same shape: derive the effective target from
//! the accumulated flags, build a constraint from its arguments, let
//! [`Expectation::assert_on`] apply the negate flag and delegate to the
//! backend, then return the chain. Only `property` replaces the target.

use std::fs;
use std::path::PathBuf;

use regex::Regex;
use serde_json::Value;

use crate::backend::Constraint;
use crate::error::ChainError;
use crate::value::{is_known_kind, measured_len};

use super::expectation::Expectation;
use super::flags::Flag;

impl Expectation {
    /// Reports an error unless the target equals the expected value.
    ///
    /// With the length flag set, the target's length is compared instead.
    /// With the file flag set, the target and the expected value are both
    /// treated as paths and the file contents are compared byte for byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(42).to().equal(42);
    /// expect("abc").to().have().length().equal(3);
    /// ```
    pub fn equal(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();

        if self.has_flag(Flag::File) {
            let path = match expected.as_str() {
                Some(path) => PathBuf::from(path),
                None => ChainError::BadInvocation(format!(
                    "file equality needs a path string argument, got `{}`",
                    expected
                ))
                .raise(),
            };
            let target = self.target().clone();
            self.path_target();
            return self.assert_on(&target, Constraint::FileEquals(path));
        }

        let effective = self.length_aware_target();
        self.assert_on(&effective, Constraint::EqualTo(expected))
    }

    /// Alias for [`Expectation::equal`].
    pub fn equals(self, expected: impl Into<Value>) -> Self {
        self.equal(expected)
    }

    /// Reports an error unless the target is strictly identical to the
    /// expected value: `1` and `1.0` are different values here.
    pub fn identical_to(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let target = self.target().clone();
        self.assert_on(&target, Constraint::IdenticalTo(expected))
    }

    /// Reports an error unless the target (or its length, with the length
    /// flag) is strictly greater than the expected number.
    pub fn above(self, expected: f64) -> Self {
        let effective = self.length_aware_target();
        self.assert_on(&effective, Constraint::GreaterThan(expected))
    }

    /// Reports an error unless the target (or its length) is strictly less
    /// than the expected number.
    pub fn below(self, expected: f64) -> Self {
        let effective = self.length_aware_target();
        self.assert_on(&effective, Constraint::LessThan(expected))
    }

    /// Reports an error unless the target (or its length) is at least the
    /// expected number.
    pub fn least(self, expected: f64) -> Self {
        let effective = self.length_aware_target();
        self.assert_on(&effective, Constraint::GreaterOrEqual(expected))
    }

    /// Reports an error unless the target (or its length) is at most the
    /// expected number.
    pub fn most(self, expected: f64) -> Self {
        let effective = self.length_aware_target();
        self.assert_on(&effective, Constraint::LessOrEqual(expected))
    }

    /// Reports an error unless the target (or its length) lies in the
    /// inclusive range `start..=finish`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(5).to().be().within(1.0, 10.0);
    /// expect("abcd").to().have().length().within(2.0, 6.0);
    /// ```
    pub fn within(self, start: f64, finish: f64) -> Self {
        let effective = self.length_aware_target();
        self.assert_on(
            &effective,
            Constraint::All(vec![
                Constraint::GreaterOrEqual(start),
                Constraint::LessOrEqual(finish),
            ]),
        )
    }

    /// Reports an error unless the target is within `delta` of the expected
    /// number.
    pub fn close_to(self, expected: f64, delta: f64) -> Self {
        let target = self.target().clone();
        self.assert_on(&target, Constraint::CloseTo { expected, delta })
    }

    /// Reports an error unless the target contains the needle.
    ///
    /// String targets check for a substring, array targets for an element.
    /// With the file flag set, the target path is read and its contents are
    /// searched; an unreadable file is a failing comparison, not a panic.
    ///
    /// The zero-argument modifier form of `contain` is reachable through
    /// [`Expectation::access`]`("contain")`, which only sets the contain flag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(vec![1, 2, 3]).to().contain(2);
    /// expect("hello world").to().contain("world");
    /// ```
    pub fn contain(self, needle: impl Into<Value>) -> Self {
        let needle = needle.into();

        if self.has_flag(Flag::File) {
            let contents = match fs::read_to_string(self.path_target()) {
                Ok(contents) => Value::String(contents),
                // Mirror the unreadable-file behavior of a failed read:
                // nothing to search, so the containment check fails.
                Err(_) => Value::Null,
            };
            return self.assert_on(&contents, Constraint::Contains(needle));
        }

        let target = self.target().clone();
        self.assert_on(&target, Constraint::Contains(needle))
    }

    /// Alias for [`Expectation::contain`].
    pub fn contains(self, needle: impl Into<Value>) -> Self {
        self.contain(needle)
    }

    /// Alias for [`Expectation::contain`].
    pub fn includes(self, needle: impl Into<Value>) -> Self {
        self.contain(needle)
    }

    /// Reports an error unless every element of the target equals the needle.
    pub fn contain_only(self, needle: impl Into<Value>) -> Self {
        let needle = needle.into();
        let target = self.target().clone();
        self.assert_on(&target, Constraint::OnlyContains(needle))
    }

    /// Reports an error unless the target is empty.
    ///
    /// Strings count characters, arrays count elements, objects count their
    /// own attributes. Other values use native emptiness: null, `false` and
    /// zero are empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect("").is_empty();
    /// expect(Vec::<i32>::new()).is_empty();
    /// expect("a").not().is_empty();
    /// ```
    pub fn is_empty(self) -> Self {
        let target = self.target().clone();
        let constraint = match &target {
            Value::String(_) | Value::Array(_) | Value::Object(_) => Constraint::CountOf(0),
            _ => Constraint::IsEmpty,
        };
        self.assert_on(&target, constraint)
    }

    /// Reports an error unless the target's length matches.
    ///
    /// A textual argument compares character lengths; a numeric argument
    /// compares the target's element (or character) count. The zero-argument
    /// modifier form is [`Expectation::length`], which sets the length flag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(vec![1, 2, 3]).to().have().length_of(3);
    /// expect("same").to().have().length_of("size");
    /// ```
    pub fn length_of(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        match &expected {
            Value::String(s) => {
                let own = match measured_len(self.target()) {
                    Ok(len) => Value::from(len as u64),
                    Err(err) => err.raise(),
                };
                let expected_len = Value::from(s.chars().count() as u64);
                self.assert_on(&own, Constraint::EqualTo(expected_len))
            }
            Value::Number(n) => {
                let count = match n.as_u64() {
                    Some(count) => count as usize,
                    None => ChainError::InvalidArgument(format!(
                        "length must be a non-negative integer, got `{}`",
                        n
                    ))
                    .raise(),
                };
                let target = self.target().clone();
                self.assert_on(&target, Constraint::CountOf(count))
            }
            other => ChainError::InvalidArgument(format!(
                "length_of takes a string or a number, got `{}`",
                other
            ))
            .raise(),
        }
    }

    /// Reports an error unless the target matches the regular expression.
    ///
    /// # Panics
    ///
    /// An invalid pattern is an `invalid argument` panic, not an assertion
    /// failure.
    pub fn matches(self, pattern: &str) -> Self {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(err) => {
                ChainError::InvalidArgument(format!("invalid pattern /{}/: {}", pattern, err))
                    .raise()
            }
        };
        let target = self.target().clone();
        self.assert_on(&target, Constraint::MatchesRegex(re))
    }

    /// Reports an error unless the target starts with the given prefix.
    pub fn start_with(self, prefix: &str) -> Self {
        let target = self.target().clone();
        self.assert_on(&target, Constraint::StartsWith(prefix.to_string()))
    }

    /// Reports an error unless the target ends with the given suffix.
    pub fn end_with(self, suffix: &str) -> Self {
        let target = self.target().clone();
        self.assert_on(&target, Constraint::EndsWith(suffix.to_string()))
    }

    /// Reports an error unless the target has the named property, then
    /// replaces the chain's target with the property value for further
    /// drill-down.
    ///
    /// Objects are indexed by key, arrays by numeric index. This is the only
    /// terminal that reassigns the target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    /// use serde_json::json;
    ///
    /// expect(json!({"a": {"b": 5}}))
    ///     .property("a")
    ///     .property("b")
    ///     .equal(5);
    /// ```
    ///
    /// # Panics
    ///
    /// A target that is neither an array nor an object is a `bad invocation`
    /// panic.
    pub fn property(self, name: &str) -> Self {
        let extracted = self.lookup_property(name);
        let target = self.target().clone();
        let mut chain = self.assert_on(&target, Constraint::HasKey(name.to_string()));
        chain.target = extracted.unwrap_or(Value::Null);
        chain
    }

    /// Like [`Expectation::property`], additionally asserting the property
    /// value equals `value`. The target is reassigned the same way.
    pub fn property_eq(self, name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        let chain = self.property(name);
        let extracted = chain.target().clone();
        chain.assert_on(&extracted, Constraint::EqualTo(value))
    }

    fn lookup_property(&self, name: &str) -> Option<Value> {
        match self.target() {
            Value::Object(map) => map.get(name).cloned(),
            Value::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index).cloned()),
            other => ChainError::BadInvocation(format!(
                "the target is not an array nor an object: `{}`",
                other
            ))
            .raise(),
        }
    }

    /// Reports an error unless the target path exists.
    ///
    /// Guarded: the file or directory flag must be set first.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use expect_chain::expect;
    ///
    /// expect("/etc/hosts").file().exists();
    /// ```
    pub fn exists(self) -> Self {
        self.require_path_flag("exists");
        let target = self.target().clone();
        self.path_target();
        self.assert_on(&target, Constraint::FileExists)
    }

    /// Reports an error unless the target path is readable.
    ///
    /// Guarded: the file or directory flag must be set first.
    pub fn readable(self) -> Self {
        self.require_path_flag("readable");
        let target = self.target().clone();
        self.path_target();
        self.assert_on(&target, Constraint::IsReadable)
    }

    /// Reports an error unless the target path is writable.
    ///
    /// Guarded: the file or directory flag must be set first.
    pub fn writable(self) -> Self {
        self.require_path_flag("writable");
        let target = self.target().clone();
        self.path_target();
        self.assert_on(&target, Constraint::IsWritable)
    }

    fn require_path_flag(&self, operation: &str) {
        if !self.has_flag(Flag::File) && !self.has_flag(Flag::Directory) {
            ChainError::BadInvocation(format!(
                "`{}` needs the file or directory flag set first",
                operation
            ))
            .raise()
        }
    }

    /// Reports an error unless the predicate holds for the target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(8).to().satisfy(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
    /// ```
    pub fn satisfy<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&Value) -> bool,
    {
        let verdict = Value::Bool(predicate(self.target()));
        self.assert_on(&verdict, Constraint::IsTrue)
    }

    /// Reports an error unless the list contains the target. The inverted
    /// relationship of [`Expectation::contain`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(2).to().be().one_of(vec![1, 2, 3]);
    /// ```
    pub fn one_of(self, list: impl Into<Value>) -> Self {
        let list = list.into();
        let target = self.target().clone();
        self.assert_on(&list, Constraint::Contains(target))
    }

    /// Reports an error unless the target is `true`.
    pub fn true_(self) -> Self {
        let target = self.target().clone();
        self.assert_on(&target, Constraint::IsTrue)
    }

    /// Reports an error unless the target is `false`.
    pub fn false_(self) -> Self {
        let target = self.target().clone();
        self.assert_on(&target, Constraint::IsFalse)
    }

    /// Reports an error unless the target is null.
    pub fn null_(self) -> Self {
        let target = self.target().clone();
        self.assert_on(&target, Constraint::IsNull)
    }

    /// Reports an error unless the target is of the named kind.
    ///
    /// Recognized kinds: `string`, `array`, `object`, `number`, `integer`,
    /// `float`, `boolean`/`bool`, `null`. The zero-argument language-chain
    /// form is reachable through [`Expectation::access`]`("a")`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect("hi").to().be().a("string");
    /// expect(3).to().be().an("integer");
    /// ```
    pub fn a(self, kind: &str) -> Self {
        if !is_known_kind(kind) {
            ChainError::InvalidArgument(format!("unknown value kind `{}`", kind)).raise()
        }
        let target = self.target().clone();
        self.assert_on(&target, Constraint::IsType(kind.to_string()))
    }

    /// Alias for [`Expectation::a`].
    pub fn an(self, kind: &str) -> Self {
        self.a(kind)
    }
}
