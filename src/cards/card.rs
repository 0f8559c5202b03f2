//! A single card on the board.

use serde::{Deserialize, Serialize};

use crate::core::CardHandle;

/// Which way a card is facing.
///
/// `Matched` is terminal: once a pair is found it stays face up until the
/// board is replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Value hidden.
    #[default]
    FaceDown,
    /// Value visible while the player is choosing or viewing a pair.
    FaceUp,
    /// Permanently resolved as part of a pair.
    Matched,
}

/// A card dealt onto the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    handle: CardHandle,
    value: u16,
    face: CardFace,
}

impl Card {
    /// Create a face-down card.
    pub fn new(handle: CardHandle, value: u16) -> Self {
        Self {
            handle,
            value,
            face: CardFace::FaceDown,
        }
    }

    #[must_use]
    pub fn handle(&self) -> CardHandle {
        self.handle
    }

    #[must_use]
    pub fn value(&self) -> u16 {
        self.value
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    /// True when the value is visible, including matched cards.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.face, CardFace::FaceUp | CardFace::Matched)
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Turn the card face up. Matched cards are left alone.
    pub fn reveal(&mut self) {
        if self.face == CardFace::FaceDown {
            self.face = CardFace::FaceUp;
        }
    }

    /// Turn the card face down. Matched cards are left alone.
    pub fn hide(&mut self) {
        if self.face == CardFace::FaceUp {
            self.face = CardFace::FaceDown;
        }
    }

    pub fn mark_matched(&mut self) {
        self.face = CardFace::Matched;
    }
}
