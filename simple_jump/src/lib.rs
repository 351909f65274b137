//! Two-way indirect dispatch fixture.
//!
//! The program picks one of two handlers from its argument count and calls the
//! chosen handler through a function pointer with its first argument. The
//! handler's result becomes the process exit status. The layout keeps a
//! strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (input conversion, selection,
//!   handler resolution, dispatch). No I/O, fully testable in isolation.
//! - **[`invocation`]**: Turns a process argument list into dispatch inputs and
//!   runs the dispatcher.
//!
//! [`exit_codes`], [`error`] and [`logging`] cover the process boundary.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod invocation;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
