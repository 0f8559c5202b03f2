//! Deck generation properties.
//!
//! These tests verify that every dealable board is a perfect pairing of
//! `1..=N/2` and that the shuffle spreads values evenly over positions.

use memory_match::core::{BoardSize, GameRng, MAX_CARDS, MIN_CARDS};
use memory_match::{BoardSizeError, Deck};
use proptest::prelude::*;

fn sorted(mut values: Vec<u16>) -> Vec<u16> {
    values.sort_unstable();
    values
}

// =============================================================================
// Pairing
// =============================================================================

/// Every valid size deals N cards with each value exactly twice.
#[test]
fn test_every_valid_size_pairs() {
    for cards in (MIN_CARDS..=MAX_CARDS).step_by(2) {
        let size = BoardSize::try_from(cards).unwrap();
        let deck = Deck::generate(size, &mut GameRng::new(cards as u64));

        assert_eq!(deck.len(), cards);
        assert!(deck.is_perfect_pairing(), "{} cards", cards);

        let expected: Vec<u16> = (1..=(cards / 2) as u16).flat_map(|v| [v, v]).collect();
        assert_eq!(sorted(deck.values()), expected);
    }
}

/// The smallest board is {1, 1, 2, 2} in some order.
#[test]
fn test_four_card_board() {
    let deck = Deck::generate(BoardSize::try_from(4).unwrap(), &mut GameRng::new(3));
    assert_eq!(sorted(deck.values()), vec![1, 1, 2, 2]);
    assert_eq!(deck.pair_count(), 2);
}

/// Out-of-range and odd sizes never reach the generator.
#[test]
fn test_invalid_sizes_rejected() {
    assert_eq!(BoardSize::try_from(5), Err(BoardSizeError::Odd(5)));
    assert_eq!(BoardSize::try_from(3), Err(BoardSizeError::Odd(3)));
    assert_eq!(BoardSize::try_from(2), Err(BoardSizeError::TooFew(2)));
    assert_eq!(BoardSize::try_from(101), Err(BoardSizeError::Odd(101)));
    assert_eq!(BoardSize::try_from(102), Err(BoardSizeError::TooMany(102)));
}

proptest! {
    /// Any seed and any valid size gives a perfect pairing.
    #[test]
    fn prop_generated_deck_is_paired(seed in any::<u64>(), half in 2usize..=50) {
        let size = BoardSize::try_from(half * 2).unwrap();
        let deck = Deck::generate(size, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), half * 2);
        prop_assert!(deck.is_perfect_pairing());
        prop_assert_eq!(sorted(deck.values()), sorted(Deck::paired_values(size)));
        prop_assert!(deck.iter().all(|c| !c.is_revealed()));
    }

    /// Shuffling never changes the multiset of elements.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), data in prop::collection::vec(any::<u16>(), 0..64)) {
        let mut shuffled = data.clone();
        GameRng::new(seed).shuffle(&mut shuffled);
        prop_assert_eq!(sorted(shuffled), sorted(data));
    }
}

// =============================================================================
// Uniformity
// =============================================================================

/// Each element lands in each position roughly equally often.
#[test]
fn test_shuffle_positions_are_uniform() {
    const TRIALS: usize = 4000;
    const LEN: usize = 4;

    let mut counts = [[0usize; LEN]; LEN];
    let mut rng = GameRng::new(2024);
    for _ in 0..TRIALS {
        let mut items = [0usize, 1, 2, 3];
        rng.shuffle(&mut items);
        for (position, &item) in items.iter().enumerate() {
            counts[position][item] += 1;
        }
    }

    // Expected 1000 per cell, standard deviation about 27.
    for row in &counts {
        for &count in row {
            assert!((850..=1150).contains(&count), "skewed counts: {:?}", counts);
        }
    }
}

/// On a real board, value 1 is as likely to sit first as value 2.
#[test]
fn test_first_card_value_is_uniform() {
    let size = BoardSize::try_from(4).unwrap();
    let mut rng = GameRng::new(99);
    let ones = (0..2000)
        .filter(|_| Deck::generate(size, &mut rng).values()[0] == 1)
        .count();

    // Expected 1000, standard deviation about 22.
    assert!((880..=1120).contains(&ones), "value 1 first {} times", ones);
}
