//! Selection signal: the argument count that drives the dispatch decision.

use crate::core::behavior::Behavior;

/// Number of invocation arguments, program name included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSignal(usize);

impl SelectionSignal {
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    pub fn count(self) -> usize {
        self.0
    }

    /// `Primary` when exactly one argument was supplied, `Secondary` otherwise.
    pub fn decision(self) -> Behavior {
        if self.0 == 1 {
            Behavior::Primary
        } else {
            Behavior::Secondary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_selects_primary() {
        assert_eq!(SelectionSignal::new(1).decision(), Behavior::Primary);
    }

    #[test]
    fn any_other_count_selects_secondary() {
        for count in [0, 2, 3, 100, usize::MAX] {
            assert_eq!(
                SelectionSignal::new(count).decision(),
                Behavior::Secondary,
                "count {count}"
            );
        }
    }
}
