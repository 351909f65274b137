//! The two candidate behaviors and their resolved handlers.
//!
//! A [`Behavior`] names which handler was chosen; [`Behavior::handler`]
//! resolves it to a plain function pointer so the call site stays indirect.

use std::fmt;

use crate::core::input::InvocationInput;

/// Amount `Secondary` adds to the first byte's value.
pub const SECONDARY_OFFSET: i32 = 10;

/// Resolved candidate behavior.
pub type Handler = fn(&InvocationInput) -> i32;

/// Closed set of selectable behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Returns the first byte's signed value.
    Primary,
    /// Returns the first byte's signed value plus [`SECONDARY_OFFSET`].
    Secondary,
}

impl Behavior {
    pub fn handler(self) -> Handler {
        match self {
            Behavior::Primary => primary,
            Behavior::Secondary => secondary,
        }
    }

    /// Resolve the handler, then call through it.
    pub fn invoke(self, input: &InvocationInput) -> i32 {
        let handler = self.handler();
        handler(input)
    }

    pub fn name(self) -> &'static str {
        match self {
            Behavior::Primary => "primary",
            Behavior::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn primary(input: &InvocationInput) -> i32 {
    input.first_value()
}

pub fn secondary(input: &InvocationInput) -> i32 {
    input.first_value() + SECONDARY_OFFSET
}
