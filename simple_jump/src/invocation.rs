//! Process-boundary orchestration: argument list in, exit status out.

use std::ffi::OsStr;

use tracing::debug;

use crate::core::behavior::Behavior;
use crate::core::dispatcher::dispatch_signal;
use crate::core::input::InvocationInput;
use crate::core::signal::SelectionSignal;
use crate::error::PreconditionViolation;
use crate::exit_codes;

/// Dispatch inputs derived from one argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub signal: SelectionSignal,
    pub input: InvocationInput,
}

/// Structured dispatch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub behavior: Behavior,
    pub result: i32,
    pub exit_code: i32,
}

impl Invocation {
    /// Build from an argument list whose first entry is the program name.
    ///
    /// The count covers every entry; the input is the raw encoded bytes of
    /// the first entry.
    pub fn from_args<I, S>(args: I) -> Result<Self, PreconditionViolation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut args = args.into_iter();
        let first = args.next().ok_or(PreconditionViolation::MissingArgument)?;
        let input = InvocationInput::new(first.as_ref().as_encoded_bytes())?;
        let count = 1 + args.count();
        Ok(Self {
            signal: SelectionSignal::new(count),
            input,
        })
    }

    /// Build from the current process's arguments.
    ///
    /// Rejections are left to the caller to report.
    pub fn from_env() -> Result<Self, PreconditionViolation> {
        Self::from_args(std::env::args_os())
    }

    pub fn run(&self) -> Outcome {
        let (behavior, result) = dispatch_signal(self.signal, &self.input);
        let exit_code = exit_codes::from_result(result);
        debug!(%behavior, result, exit_code, "invocation finished");
        Outcome {
            behavior,
            result,
            exit_code,
        }
    }
}
