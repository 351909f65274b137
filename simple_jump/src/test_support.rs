//! Test-only helpers for constructing dispatch inputs.

use crate::core::input::InvocationInput;

/// Build an input from raw bytes; panics on an empty slice.
pub fn input(bytes: &[u8]) -> InvocationInput {
    InvocationInput::new(bytes).expect("fixture input must be non-empty")
}

/// Build a one-byte input.
pub fn byte_input(byte: u8) -> InvocationInput {
    input(&[byte])
}

/// Every possible leading byte, each as a one-byte input.
pub fn all_byte_inputs() -> impl Iterator<Item = (u8, InvocationInput)> {
    (u8::MIN..=u8::MAX).map(|byte| (byte, byte_input(byte)))
}
