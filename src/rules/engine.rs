//! Turn state machine.
//!
//! ```text
//! Idle --click--> OneSelected --click other--> Locked --outcome applied--> Idle
//! ```
//!
//! Transitions are pure: `TurnPhase::on_click` returns the next phase and
//! what the controller should do, without touching the deck.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardHandle;

/// Where the player is within a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card selected.
    #[default]
    Idle,
    /// First card flipped, waiting for the second.
    OneSelected { first: CardHandle },
    /// Two cards flipped; input is locked until the outcome is applied.
    Locked { first: CardHandle, second: CardHandle },
}

/// Why a click had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Two cards are already up.
    BoardLocked,
    /// The card is the current first selection.
    AlreadySelected,
    /// The card belongs to a found pair.
    AlreadyMatched,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoreReason::BoardLocked => "board is locked",
            IgnoreReason::AlreadySelected => "card is already selected",
            IgnoreReason::AlreadyMatched => "card is already matched",
        };
        f.write_str(text)
    }
}

/// What the controller must do in response to a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickDecision {
    Ignore(IgnoreReason),
    /// Reveal the card as the first of a pair.
    RevealFirst,
    /// Reveal the card as the second of a pair and evaluate.
    RevealSecond { first: CardHandle },
}

impl TurnPhase {
    /// Decide how a click on `card` is handled.
    ///
    /// Matched cards are ignored in every phase; the lock is checked next.
    #[must_use]
    pub fn on_click(self, card: CardHandle, card_matched: bool) -> (TurnPhase, ClickDecision) {
        if card_matched {
            return (self, ClickDecision::Ignore(IgnoreReason::AlreadyMatched));
        }

        match self {
            TurnPhase::Idle => (TurnPhase::OneSelected { first: card }, ClickDecision::RevealFirst),
            TurnPhase::OneSelected { first } if first == card => {
                (self, ClickDecision::Ignore(IgnoreReason::AlreadySelected))
            }
            TurnPhase::OneSelected { first } => (
                TurnPhase::Locked { first, second: card },
                ClickDecision::RevealSecond { first },
            ),
            TurnPhase::Locked { .. } => (self, ClickDecision::Ignore(IgnoreReason::BoardLocked)),
        }
    }

    /// Whether new selections are suppressed.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, TurnPhase::Locked { .. })
    }

    /// Currently selected cards, in selection order.
    #[must_use]
    pub fn selected(self) -> SmallVec<[CardHandle; 2]> {
        match self {
            TurnPhase::Idle => SmallVec::new(),
            TurnPhase::OneSelected { first } => smallvec::smallvec![first],
            TurnPhase::Locked { first, second } => smallvec::smallvec![first, second],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: CardHandle = CardHandle(0);
    const B: CardHandle = CardHandle(1);
    const C: CardHandle = CardHandle(2);

    #[test]
    fn test_idle_to_one_selected() {
        let (next, decision) = TurnPhase::Idle.on_click(A, false);
        assert_eq!(next, TurnPhase::OneSelected { first: A });
        assert_eq!(decision, ClickDecision::RevealFirst);
    }

    #[test]
    fn test_same_card_twice_is_ignored() {
        let phase = TurnPhase::OneSelected { first: A };
        let (next, decision) = phase.on_click(A, false);
        assert_eq!(next, phase);
        assert_eq!(decision, ClickDecision::Ignore(IgnoreReason::AlreadySelected));
        assert_eq!(next.selected().as_slice(), &[A]);
    }

    #[test]
    fn test_second_card_locks() {
        let (next, decision) = TurnPhase::OneSelected { first: A }.on_click(B, false);
        assert_eq!(next, TurnPhase::Locked { first: A, second: B });
        assert_eq!(decision, ClickDecision::RevealSecond { first: A });
        assert!(next.is_locked());
        assert_eq!(next.selected().as_slice(), &[A, B]);
    }

    #[test]
    fn test_locked_ignores_everything() {
        let phase = TurnPhase::Locked { first: A, second: B };
        for card in [A, B, C] {
            let (next, decision) = phase.on_click(card, false);
            assert_eq!(next, phase);
            assert_eq!(decision, ClickDecision::Ignore(IgnoreReason::BoardLocked));
        }
    }

    #[test]
    fn test_matched_card_ignored_in_every_phase() {
        let phases = [
            TurnPhase::Idle,
            TurnPhase::OneSelected { first: A },
            TurnPhase::Locked { first: A, second: B },
        ];
        for phase in phases {
            let (next, decision) = phase.on_click(C, true);
            assert_eq!(next, phase);
            assert_eq!(decision, ClickDecision::Ignore(IgnoreReason::AlreadyMatched));
        }
    }

    #[test]
    fn test_idle_selects_nothing() {
        assert!(TurnPhase::Idle.selected().is_empty());
        assert!(!TurnPhase::Idle.is_locked());
    }
}
