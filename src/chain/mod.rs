//! Fluent assertion chains.
//!
//! A chain starts at [`expect`] (or [`expect_with`]), passes through any
//! number of modifiers - pure readability words like `to` and `be`, or
//! flag-setters like `not` and `length` - and ends at a terminal that sends
//! one assertion to the backend. Terminals panic on failure, which is how a
//! failed test reaches the runner.
//!
//! # Example
//!
//! ```rust
//! use expect_chain::expect;
//!
//! expect(7).to().be().above(5.0);
//! expect(vec![1, 2, 3]).to().have().length().below(5.0);
//! expect("hello").not().to().equal("goodbye");
//! ```

mod expectation;
mod flags;
mod terminals;

pub use expectation::{expect, expect_with, Expectation, Expects};
pub use flags::{Flag, Flags};

#[cfg(test)]
mod tests;
