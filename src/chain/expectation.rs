//! Chain state and entry points for the fluent assertion API.
//!
//! This module provides:
//! - `expect()` / `expect_with()` - Entry points wrapping a subject value
//! - `Expectation` - The chain state: target, description and flags
//! - `Expects` - Mixin trait for test fixtures
//! - Modifiers and the accessor-dispatch form of property-style chaining
//!
//! Terminal operations live in [`super::terminals`].

use serde_json::Value;

use crate::backend;
use crate::backend::Constraint;
use crate::error::ChainError;
use crate::value::measured_len;

use super::flags::{Flag, Flags};

/// Wrap a value for fluent assertions.
///
/// This is the entry point for the chain API. Modifiers read like English
/// and terminals trigger the assertion.
///
/// # Example
///
/// ```rust
/// use expect_chain::expect;
///
/// expect(7).to().be().above(5.0);
/// expect("hello").to().have().length().equal(5);
/// expect(vec![1, 2, 3]).not().is_empty();
/// ```
pub fn expect(target: impl Into<Value>) -> Expectation {
    Expectation::new(target.into(), None)
}

/// Wrap a value for fluent assertions, with a failure description.
///
/// The description is carried unchanged for the life of the chain and shown
/// only when an assertion fails.
///
/// # Example
///
/// ```rust
/// use expect_chain::expect_with;
///
/// expect_with(2 + 2, "arithmetic still works").to().equal(4);
/// ```
pub fn expect_with(target: impl Into<Value>, description: impl Into<String>) -> Expectation {
    Expectation::new(target.into(), Some(description.into()))
}

/// Entry macro accepting one or two arguments.
///
/// `expect!(value)` and `expect!(value, "description")` are the only legal
/// arities; anything else is rejected at compile time.
///
/// # Example
///
/// ```rust
/// expect_chain::expect!(vec![1, 2, 3]).to().contain(2);
/// expect_chain::expect!(true, "sanity").to().be().true_();
/// ```
#[macro_export]
macro_rules! expect {
    ($target:expr) => {
        $crate::expect($target)
    };
    ($target:expr, $description:expr) => {
        $crate::expect_with($target, $description)
    };
}

/// Mixin surface: lets any test fixture expose `self.expect(...)`.
///
/// All methods are provided; adopting the capability is one line.
///
/// # Example
///
/// ```rust
/// use expect_chain::Expects;
///
/// struct Fixture;
/// impl Expects for Fixture {}
///
/// let fixture = Fixture;
/// fixture.expect(3).to().be().below(10.0);
/// ```
pub trait Expects {
    /// Wrap a value for fluent assertions. Identical to the free [`expect`].
    fn expect(&self, target: impl Into<Value>) -> Expectation {
        expect(target)
    }

    /// Wrap a value with a failure description. Identical to [`expect_with`].
    fn expect_with(
        &self,
        target: impl Into<Value>,
        description: impl Into<String>,
    ) -> Expectation {
        expect_with(target, description)
    }
}

/// State for one fluent chain: the subject value, an optional failure
/// description, and the flags accumulated so far.
///
/// Builder methods take `self` and return `Self`, so a chain is a linear
/// sequence of calls by construction. Cloning forks the accumulated state
/// into an independent chain. A chain that never reaches a terminal asserts
/// nothing.
#[derive(Debug, Clone)]
pub struct Expectation {
    pub(super) target: Value,
    pub(super) description: Option<String>,
    pub(super) flags: Flags,
}

impl Expectation {
    fn new(target: Value, description: Option<String>) -> Self {
        Self {
            target,
            description,
            flags: Flags::default(),
        }
    }

    /// The current subject value.
    pub fn target(&self) -> &Value {
        &self.target
    }

    /// Whether a flag has been set on this chain.
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.is_set(flag)
    }

    // =========================================================================
    // Pure modifiers (identity, for readability)
    // =========================================================================

    /// Chainable word to improve assertion readability.
    pub fn at(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn be(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn been(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn but(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn does(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn has(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn have(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn is(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn of(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn same(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn that(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn to(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn which(self) -> Self {
        self
    }

    /// Chainable word to improve assertion readability.
    pub fn with(self) -> Self {
        self
    }

    // =========================================================================
    // Flag-setting modifiers
    // =========================================================================

    /// Negate every assertion following in the chain.
    ///
    /// The flag is chain-scoped, not call-scoped: once set it colors every
    /// subsequent terminal until a new chain is started.
    pub fn not(mut self) -> Self {
        self.flags.set(Flag::Negate);
        self
    }

    /// Subsequent assertions target the length of the value instead of the
    /// value itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(vec![1, 2, 3]).to().have().length().above(2.0);
    /// ```
    pub fn length(mut self) -> Self {
        self.flags.set(Flag::Length);
        self
    }

    /// The assertions following in the chain target a file path.
    pub fn file(mut self) -> Self {
        self.flags.set(Flag::File);
        self
    }

    /// The assertions following in the chain target a directory path.
    pub fn directory(mut self) -> Self {
        self.flags.set(Flag::Directory);
        self
    }

    /// The assertions following in the chain target JSON data.
    pub fn json(mut self) -> Self {
        self.flags.set(Flag::Json);
        self
    }

    /// The assertions following in the chain target XML data.
    pub fn xml(mut self) -> Self {
        self.flags.set(Flag::Xml);
        self
    }

    /// Ordering matters for the assertions following in the chain.
    pub fn ordered(mut self) -> Self {
        self.flags.set(Flag::Ordered);
        self
    }

    pub(super) fn mark_contain(mut self) -> Self {
        self.flags.set(Flag::Contain);
        self
    }

    // =========================================================================
    // Accessor dispatch (property-style chaining by name)
    // =========================================================================

    /// Invoke a zero-argument operation by name.
    ///
    /// This is the reflective form of the chain: every public zero-argument
    /// modifier, flag-setter and terminal is reachable through its English
    /// name, so `expect(x).access("to").access("be").access("true")` behaves
    /// exactly like `expect(x).to().be().true_()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expect_chain::expect;
    ///
    /// expect(true).access("to").access("be").access("true");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with a `bad invocation` error for names that don't resolve to a
    /// zero-argument operation.
    pub fn access(self, name: &str) -> Self {
        match name {
            // Zero-argument "a"/"an" are pure language chains; the typed form
            // takes an argument.
            "a" | "an" | "at" | "be" | "been" | "but" | "does" | "has" | "have" | "is" | "of"
            | "same" | "that" | "to" | "which" | "with" => self,
            "not" => self.not(),
            "length" => self.length(),
            "file" => self.file(),
            "directory" => self.directory(),
            "json" => self.json(),
            "xml" => self.xml(),
            "ordered" => self.ordered(),
            "contain" => self.mark_contain(),
            "true" => self.true_(),
            "false" => self.false_(),
            "null" => self.null_(),
            "empty" => self.is_empty(),
            "exist" | "exists" => self.exists(),
            "readable" => self.readable(),
            "writable" => self.writable(),
            _ => {
                ChainError::BadInvocation(format!("no accessor named `{}`", name)).raise()
            }
        }
    }

    // =========================================================================
    // Internal helpers shared by terminals
    // =========================================================================

    /// Effective target for length-aware terminals: the measured length when
    /// the length flag is set, the raw target otherwise.
    pub(super) fn length_aware_target(&self) -> Value {
        if self.flags.is_set(Flag::Length) {
            match measured_len(&self.target) {
                Ok(len) => Value::from(len as u64),
                Err(err) => err.raise(),
            }
        } else {
            self.target.clone()
        }
    }

    /// Send a `(value, constraint, description)` triple to the backend,
    /// applying the negate flag.
    pub(super) fn assert_on(self, effective: &Value, constraint: Constraint) -> Self {
        let constraint = if self.flags.is_set(Flag::Negate) {
            constraint.negated()
        } else {
            constraint
        };
        backend::assert_that(effective, &constraint, self.description.as_deref().unwrap_or(""));
        self
    }

    /// The target interpreted as a filesystem path, for file-mode terminals.
    pub(super) fn path_target(&self) -> &str {
        match self.target.as_str() {
            Some(path) => path,
            None => ChainError::BadInvocation(format!(
                "file and directory assertions need a path string target, got `{}`",
                self.target
            ))
            .raise(),
        }
    }
}
