//! Stable exit codes for the `simple_jump` binary.

/// A precondition violation was detected before dispatch.
pub const INVALID: i32 = 1;

/// Truncate a dispatch result to the low 8 bits used as the exit status.
///
/// Negative results wrap the same way a C `return` from `main` does, so `-128`
/// exits with `128`.
pub fn from_result(result: i32) -> i32 {
    result & 0xFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_values_that_fit_in_a_byte() {
        assert_eq!(from_result(0), 0);
        assert_eq!(from_result(88), 88);
        assert_eq!(from_result(137), 137);
    }

    #[test]
    fn wraps_negative_results() {
        assert_eq!(from_result(-128), 128);
        assert_eq!(from_result(-118), 138);
        assert_eq!(from_result(-1), 255);
    }

    #[test]
    fn drops_high_bits() {
        assert_eq!(from_result(0x1_0A), 0x0A);
    }
}
