//! Deck supplier.
//!
//! A `Deck` is always exactly one full deck: 52 distinct cards. Dealing
//! trusts that, so custom decks are validated on construction.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, DECK_SIZE};
use crate::core::{DeckError, GameRng};

/// A full 52-card deck in dealing order (first card dealt first).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The deck in canonical order: suit by suit, Ace to King.
    #[must_use]
    pub fn ordered() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    /// A deck shuffled by `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// A deck shuffled from a fresh RNG seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::shuffled(&mut GameRng::new(seed))
    }

    /// A deck in the given order, validated.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize {
                count: cards.len(),
                expected: DECK_SIZE,
            });
        }

        let mut seen = FxHashSet::default();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(DeckError::Duplicate { card });
            }
        }

        Ok(Self { cards })
    }

    /// Cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
