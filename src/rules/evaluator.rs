//! Pair evaluation.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Result of comparing two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Match,
    Mismatch,
}

/// Decides whether two revealed cards form a pair.
///
/// Games with other pairing rules (colour pairs, picture/word pairs)
/// implement this instead of changing the controller.
pub trait MatchRule {
    fn is_match(&self, first: &Card, second: &Card) -> bool;

    /// Compare two cards.
    fn evaluate(&self, first: &Card, second: &Card) -> MatchOutcome {
        if self.is_match(first, second) {
            MatchOutcome::Match
        } else {
            MatchOutcome::Mismatch
        }
    }
}

/// Cards pair when their values are equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueEquality;

impl MatchRule for ValueEquality {
    fn is_match(&self, first: &Card, second: &Card) -> bool {
        first.value() == second.value()
    }
}
