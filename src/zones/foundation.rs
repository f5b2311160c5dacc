//! Foundations: one ascending pile per suit, Ace to King.
//!
//! A foundation's suit is the suit of its bottom card, so it locks on the
//! first Ace accepted and stays locked for as long as the pile is
//! non-empty.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardView, Face, Pile, Rank, Suit, RANK_COUNT};
use crate::core::StackError;

/// One foundation pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation<F: Face> {
    pub pile: Pile<F>,
}

impl<F: Face> Default for Foundation<F> {
    fn default() -> Self {
        Self { pile: Pile::new() }
    }
}

impl<F: Face> Foundation<F> {
    /// Create a foundation holding `pile`.
    #[must_use]
    pub fn new(pile: Pile<F>) -> Self {
        Self { pile }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Check if the foundation is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Check if the foundation holds a full suit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pile.len() == RANK_COUNT
    }

    /// Top card.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.pile.known_top()
    }

    /// Locked suit, `None` while empty.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.pile.bottom().and_then(Face::known).map(|card| card.suit)
    }

    /// Rank the next card must have: Ace when empty, `None` when complete.
    #[must_use]
    pub fn next_required_rank(&self) -> Option<Rank> {
        match self.pile.top() {
            None => Some(Rank::Ace),
            Some(top) => top.known().and_then(|card| card.rank.next()),
        }
    }

    /// Whether `card` may go on this foundation.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        self.next_required_rank() == Some(card.rank)
            && self.suit().map_or(true, |suit| suit == card.suit)
    }

    /// Whether the offered cards may go on this foundation: exactly one
    /// card, accepted by `accepts`.
    #[must_use]
    pub fn can_accept(&self, cards: &[Card]) -> bool {
        matches!(cards, [card] if self.accepts(*card))
    }

    /// Put a card on top.
    pub fn accept(&mut self, card: F) {
        self.pile.add([card]);
    }

    /// Take back the card put there by `accept`.
    pub fn undo_accept(&mut self) -> Result<F, StackError> {
        self.pile.pop()
    }

    /// Take the top card off.
    pub fn take_top(&mut self) -> Result<F, StackError> {
        self.pile.pop()
    }

    /// Put back the card taken by `take_top`.
    pub fn undo_take_top(&mut self, card: F) {
        self.pile.add([card]);
    }
}

impl Foundation<Card> {
    /// Observer view. Foundations are always face up.
    #[must_use]
    pub fn pov(&self) -> Foundation<CardView> {
        Foundation {
            pile: self.pile.shown(),
        }
    }
}
