//! Progress towards clearing the board.

use serde::{Deserialize, Serialize};

/// Pairs found so far on the current board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    matched_pairs: usize,
    total_pairs: usize,
    /// Pairs evaluated, matched or not.
    attempts: u32,
}

impl Progress {
    pub fn new(total_pairs: usize) -> Self {
        Self {
            matched_pairs: 0,
            total_pairs,
            attempts: 0,
        }
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.total_pairs - self.matched_pairs
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn record_match(&mut self) {
        debug_assert!(self.matched_pairs < self.total_pairs, "more matches than pairs");
        self.matched_pairs = (self.matched_pairs + 1).min(self.total_pairs);
        self.attempts += 1;
    }

    pub fn record_mismatch(&mut self) {
        self.attempts += 1;
    }

    /// True once every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_pairs > 0 && self.matched_pairs == self.total_pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts() {
        let mut progress = Progress::new(2);
        assert!(!progress.is_complete());
        assert_eq!(progress.remaining_pairs(), 2);

        progress.record_mismatch();
        progress.record_match();
        assert_eq!(progress.matched_pairs(), 1);
        assert_eq!(progress.attempts(), 2);
        assert!(!progress.is_complete());

        progress.record_match();
        assert!(progress.is_complete());
        assert_eq!(progress.remaining_pairs(), 0);
        assert_eq!(progress.attempts(), 3);
    }

    #[test]
    fn test_empty_progress_is_not_complete() {
        assert!(!Progress::default().is_complete());
    }
}
