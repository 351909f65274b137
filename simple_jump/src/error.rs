//! Error taxonomy for the process boundary.

use thiserror::Error;

/// The caller broke the dispatch precondition (a non-empty first argument).
///
/// The dispatcher itself never sees these: they are raised while building an
/// [`InvocationInput`](crate::core::input::InvocationInput) or an
/// [`Invocation`](crate::invocation::Invocation).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionViolation {
    /// The argument list had no entries, so there is no first argument.
    #[error("argument list is empty: no first argument to dispatch on")]
    MissingArgument,

    /// The first argument was present but had no bytes.
    #[error("first argument is empty: dispatch needs at least one byte")]
    EmptyInput,
}
