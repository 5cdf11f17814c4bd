//! # expect-chain
//!
//! A fluent, English-readable assertion DSL for Rust tests.
//!
//! Chains start at [`expect`], read like a sentence, and resolve to a single
//! assertion. Modifiers are free: some are pure readability words (`to`,
//! `be`, `have`), some set flags that change how the terminal interprets the
//! target (`not`, `length`, `file`). The terminal composes an effective
//! value and predicate and hands them to the assertion backend, which panics
//! with a readable message when the predicate does not hold.
//!
//! ## Quick Start
//!
//! ```rust
//! use expect_chain::expect;
//!
//! struct Config { retries: u32 }
//!
//! let config = Config { retries: 3 };
//!
//! expect(config.retries).to().be().above(0.0);
//! expect(vec!["a", "b"]).to().have().length_of(2);
//! expect("deploy finished").to().contain("finished");
//! expect("deploy finished").not().to().matches(r"error|fail");
//! ```
//!
//! ## Negation and flags
//!
//! Flags accumulate on the chain and color the terminal. `not` is
//! chain-scoped: once set, every later terminal in the same chain is negated.
//!
//! ```rust
//! use expect_chain::expect;
//!
//! expect(vec![1, 2, 3]).to().have().length().above(2.0);
//! expect(5).not().to().equal(6);
//! ```
//!
//! ## Drill-down
//!
//! `property` asserts a key exists and then retargets the chain at the
//! extracted value:
//!
//! ```rust
//! use expect_chain::expect;
//! use serde_json::json;
//!
//! expect(json!({"a": {"b": 5}}))
//!     .property("a")
//!     .property("b")
//!     .equal(5);
//! ```
//!
//! ## Test fixtures
//!
//! Any type can adopt the [`Expects`] capability to expose `self.expect(...)`:
//!
//! ```rust
//! use expect_chain::Expects;
//!
//! struct MyTestCase;
//! impl Expects for MyTestCase {}
//!
//! let case = MyTestCase;
//! case.expect(true).to().be().true_();
//! ```

pub mod backend;
pub mod chain;
pub mod error;

mod value;

// Chain entry points and state
pub use chain::{expect, expect_with, Expectation, Expects, Flag, Flags};

// Backend surface
pub use backend::{assert_that, check, AssertionResult, Constraint};

// Error kinds for chain misuse
pub use error::ChainError;
