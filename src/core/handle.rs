//! Card handles.
//!
//! Game logic never holds references to presentation objects. Each card is
//! addressed by a `CardHandle`, its index in the current deck, and the
//! presentation layer keeps its own lookup table from handles to widgets.
//!
//! ```
//! use memory_match::core::CardHandle;
//!
//! let handle = CardHandle::new(3);
//! assert_eq!(handle.index(), 3);
//! assert_eq!(format!("{}", handle), "Card(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier for a card on the current board.
///
/// Handles are only meaningful for the board they were dealt with; a
/// restart deals a new deck and reuses the same range of handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardHandle(pub u16);

impl CardHandle {
    /// Create a handle from a deck position.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Position of the card in the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Iterate over all handles for a deck of `card_count` cards.
    pub fn all(card_count: usize) -> impl Iterator<Item = CardHandle> {
        (0..card_count as u16).map(CardHandle)
    }
}

impl std::fmt::Display for CardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<u16> for CardHandle {
    fn from(index: u16) -> Self {
        Self(index)
    }
}
