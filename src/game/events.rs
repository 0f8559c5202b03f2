//! Events emitted by a game session.
//!
//! The controller never touches presentation objects. It queues events and
//! the presentation layer drains them to update whatever it draws.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::CardHandle;

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board was dealt; all previous handles now refer to it.
    BoardDealt { generation: u64, cards: usize },

    /// A card was turned face up.
    CardRevealed { card: CardHandle, value: u16 },

    /// Two cards were found to pair and are now permanently face up.
    PairMatched {
        first: CardHandle,
        second: CardHandle,
        value: u16,
    },

    /// Two cards did not pair; they turn back over after `delay`.
    PairMismatched {
        first: CardHandle,
        second: CardHandle,
        revert: u64,
        delay: Duration,
    },

    /// A mismatched pair was turned back face down.
    CardsHidden { first: CardHandle, second: CardHandle },

    /// A pending revert was dropped because the board was replaced.
    RevertCancelled { revert: u64 },

    /// Every pair on the board has been found.
    GameCompleted { attempts: u32 },
}
