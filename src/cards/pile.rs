//! Ordered piles with top/bottom-only access.
//!
//! A `Pile` is the only container zones use. The tail of the pile is its
//! top. Cards enter and leave at the top (`add`/`remove`) or the bottom
//! (`unshift`/`shift`) and nowhere else, which is what makes every zone
//! operation exactly invertible.
//!
//! `Stack` and `StackView` are the two instantiations: authoritative cards
//! and observer card views.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardView, Face};
use crate::core::StackError;

/// A short run of cards taken from or put onto a pile.
///
/// Most transfers move 1-3 cards, which stay inline.
pub type Batch<F> = SmallVec<[F; 3]>;

/// Authoritative pile.
pub type Stack = Pile<Card>;

/// Observer pile, same length as the authoritative one.
pub type StackView = Pile<CardView>;

/// An ordered pile of card faces. Uses `im::Vector` so cloning a whole
/// game state for a projection or snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile<F: Face> {
    cards: Vector<F>,
}

impl<F: Face> Default for Pile<F> {
    fn default() -> Self {
        Self {
            cards: Vector::new(),
        }
    }
}

impl<F: Face> FromIterator<F> for Pile<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<F: Face> Pile<F> {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top slot.
    #[must_use]
    pub fn top(&self) -> Option<F> {
        self.cards.back().copied()
    }

    /// Bottom slot.
    #[must_use]
    pub fn bottom(&self) -> Option<F> {
        self.cards.front().copied()
    }

    /// Slot at `index`, counting from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<F> {
        self.cards.get(index).copied()
    }

    /// The top card, if it is known.
    #[must_use]
    pub fn known_top(&self) -> Option<Card> {
        self.top().and_then(Face::known)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.cards.iter().copied()
    }

    /// Append to the top, first item lowest.
    pub fn add(&mut self, items: impl IntoIterator<Item = F>) {
        self.cards.extend(items);
    }

    /// Remove the top `n` slots, keeping their relative order.
    pub fn remove(&mut self, n: usize) -> Result<Batch<F>, StackError> {
        let available = self.len();
        if n > available {
            return Err(StackError::Underflow {
                requested: n,
                available,
            });
        }
        Ok(self.cards.split_off(available - n).into_iter().collect())
    }

    /// Remove the top slot.
    pub fn pop(&mut self) -> Result<F, StackError> {
        self.cards.pop_back().ok_or(StackError::Underflow {
            requested: 1,
            available: 0,
        })
    }

    /// Remove every slot.
    pub fn remove_all(&mut self) -> Batch<F> {
        std::mem::take(&mut self.cards).into_iter().collect()
    }

    /// Prepend under the bottom, first item lowest.
    pub fn unshift(&mut self, items: impl IntoIterator<Item = F>) {
        let mut bottom: Vector<F> = items.into_iter().collect();
        bottom.append(std::mem::take(&mut self.cards));
        self.cards = bottom;
    }

    /// Remove the bottom `n` slots, keeping their relative order.
    ///
    /// Exact inverse of `unshift`.
    pub fn shift(&mut self, n: usize) -> Result<Batch<F>, StackError> {
        let available = self.len();
        if n > available {
            return Err(StackError::Underflow {
                requested: n,
                available,
            });
        }
        let rest = self.cards.split_off(n);
        let bottom = std::mem::replace(&mut self.cards, rest);
        Ok(bottom.into_iter().collect())
    }
}

impl Stack {
    /// Observer view with every card face up.
    #[must_use]
    pub fn shown(&self) -> StackView {
        self.iter().map(CardView::Known).collect()
    }

    /// Observer view with every card face down.
    #[must_use]
    pub fn concealed(&self) -> StackView {
        StackView::hidden(self.len())
    }
}

impl StackView {
    /// A pile of `len` opaque markers.
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        std::iter::repeat(CardView::Hidden).take(len).collect()
    }

    /// Replace the top `cards.len()` slots with the given known cards,
    /// first card lowest.
    pub fn reveal(&mut self, cards: &[Card]) -> Result<(), StackError> {
        let available = self.len();
        if cards.len() > available {
            return Err(StackError::Underflow {
                requested: cards.len(),
                available,
            });
        }
        let start = available - cards.len();
        for (offset, &card) in cards.iter().enumerate() {
            self.cards.set(start + offset, CardView::Known(card));
        }
        Ok(())
    }

    /// Number of opaque slots.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.iter().filter(|slot| slot.known().is_none()).count()
    }
}
