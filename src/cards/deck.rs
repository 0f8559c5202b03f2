//! Deck generation.
//!
//! A deck of N cards holds the values `1..=N/2`, each exactly twice, in a
//! uniformly random order.
//!
//! ```
//! use memory_match::cards::Deck;
//! use memory_match::core::{BoardSize, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let deck = Deck::generate(BoardSize::try_from(4).unwrap(), &mut rng);
//!
//! let mut values = deck.values();
//! values.sort();
//! assert_eq!(values, vec![1, 1, 2, 2]);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{BoardSize, CardHandle, GameRng};

/// The ordered cards of one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a shuffled deck of `size` cards.
    pub fn generate(size: BoardSize, rng: &mut GameRng) -> Self {
        let mut values = Self::paired_values(size);
        rng.shuffle(&mut values);
        Self::from_values(&values)
    }

    /// The unshuffled values for a board: `1..=pairs` followed by `1..=pairs`.
    #[must_use]
    pub fn paired_values(size: BoardSize) -> Vec<u16> {
        let pairs = size.pairs() as u16;
        (1..=pairs).chain(1..=pairs).collect()
    }

    /// Lay out face-down cards in the given order.
    ///
    /// Used for scripted boards; callers are responsible for the pairing.
    pub fn from_values(values: &[u16]) -> Self {
        let cards = values
            .iter()
            .zip(CardHandle::all(values.len()))
            .map(|(&value, handle)| Card::new(handle, value))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn get(&self, handle: CardHandle) -> Option<&Card> {
        self.cards.get(handle.index())
    }

    pub fn get_mut(&mut self, handle: CardHandle) -> Option<&mut Card> {
        self.cards.get_mut(handle.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card values in deck order.
    #[must_use]
    pub fn values(&self) -> Vec<u16> {
        self.cards.iter().map(Card::value).collect()
    }

    /// Number of cards already matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Check that every value appears exactly twice.
    #[must_use]
    pub fn is_perfect_pairing(&self) -> bool {
        let mut counts: FxHashMap<u16, usize> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.value()).or_insert(0) += 1;
        }
        counts.values().all(|&n| n == 2)
    }
}
