//! Cards and decks.
//!
//! - `Card`: one dealt card with its value and facing
//! - `Deck`: the shuffled, perfectly paired cards of one board

mod card;
mod deck;

pub use card::{Card, CardFace};
pub use deck::Deck;
