//! Error types for chain misuse.
//!
//! These cover programmer errors only. A failing assertion is not an error
//! value; it is signalled by the backend panicking (see [`crate::backend`]),
//! which is how the failure reaches the test runner.

/// A chain was driven in a way no passing or failing test could justify.
///
/// Both variants are surfaced immediately at the call site by panicking with
/// the `Display` text; the library never catches them.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// A guarded terminal was called without its required flag, an accessor
    /// name resolved to nothing, or a terminal was applied to a target kind
    /// it cannot accept.
    #[error("bad invocation: {0}")]
    BadInvocation(String),

    /// An argument (or the target, for length derivation) was outside the
    /// domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChainError {
    /// Surface the error at the call site. Chain methods return `Self` for
    /// fluency, so misuse cannot be reported as a `Result`.
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self)
    }
}
