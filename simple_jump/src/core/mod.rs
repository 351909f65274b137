//! Deterministic, pure logic for the dispatch fixture.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod behavior;
pub mod dispatcher;
pub mod input;
pub mod signal;
