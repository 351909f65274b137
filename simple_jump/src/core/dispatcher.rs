//! The dispatch operation: decide, resolve, call indirectly.

use tracing::debug;

use crate::core::behavior::Behavior;
use crate::core::input::InvocationInput;
use crate::core::signal::SelectionSignal;

/// Select a behavior from `count` and invoke it with `input`.
///
/// Pure: the result depends only on `count == 1` and the first byte of
/// `input`. The selected handler is reached through a function pointer.
pub fn dispatch(count: usize, input: &InvocationInput) -> i32 {
    let (_, result) = dispatch_signal(SelectionSignal::new(count), input);
    result
}

/// Decide once from `signal`, invoke the chosen behavior, and report both.
pub fn dispatch_signal(signal: SelectionSignal, input: &InvocationInput) -> (Behavior, i32) {
    let behavior = signal.decision();
    let result = behavior.invoke(input);
    debug!(
        count = signal.count(),
        %behavior,
        first_byte = input.first_byte(),
        result,
        "dispatched"
    );
    (behavior, result)
}
