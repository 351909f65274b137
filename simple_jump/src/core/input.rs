//! Invocation input and the signed-byte conversion.

use crate::error::PreconditionViolation;

/// Promote a byte to `i32` using signed-char semantics.
///
/// The byte is read as two's complement `i8` and sign-extended, so
/// `0x00..=0x7F` map to `0..=127` and `0x80..=0xFF` map to `-128..=-1`.
pub fn signed_value(byte: u8) -> i32 {
    i32::from(byte as i8)
}

/// A non-empty byte sequence handed to the selected behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationInput {
    bytes: Vec<u8>,
}

impl InvocationInput {
    /// Wrap `bytes`, rejecting the empty sequence.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, PreconditionViolation> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(PreconditionViolation::EmptyInput);
        }
        Ok(Self { bytes })
    }

    pub fn first_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// Sign-extended value of the first byte.
    pub fn first_value(&self) -> i32 {
        signed_value(self.first_byte())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_value_pins_boundaries() {
        assert_eq!(signed_value(0x00), 0);
        assert_eq!(signed_value(0x58), 88);
        assert_eq!(signed_value(0x7F), 127);
        assert_eq!(signed_value(0x80), -128);
        assert_eq!(signed_value(0xFF), -1);
    }

    #[test]
    fn new_rejects_empty_sequence() {
        let err = InvocationInput::new(Vec::new()).unwrap_err();
        assert_eq!(err, PreconditionViolation::EmptyInput);
    }

    #[test]
    fn only_first_byte_matters() {
        let input = InvocationInput::new(&b"Xyz"[..]).expect("input");
        assert_eq!(input.first_byte(), b'X');
        assert_eq!(input.first_value(), 88);
        assert_eq!(input, InvocationInput::new(&b"Xyz"[..]).expect("input"));
        assert_ne!(input, InvocationInput::new(&b"X"[..]).expect("input"));
    }
}
