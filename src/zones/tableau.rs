//! Tableau columns: a face-down back pile under a face-up front pile.

use serde::{Deserialize, Serialize};

use crate::cards::{Batch, Card, CardView, Face, Pile, Rank};
use crate::core::StackError;

/// One tableau column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau<F: Face> {
    /// Face-down cards.
    pub back: Pile<F>,
    /// Face-up cards, a descending alternating-color run.
    pub front: Pile<F>,
}

/// Result of `Tableau::take_from_front`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taken<F> {
    /// Cards removed from the front, bottom first.
    pub cards: Batch<F>,
    /// Back card turned face up because the front emptied.
    pub flipped: Option<F>,
}

impl<F: Face> Default for Tableau<F> {
    fn default() -> Self {
        Self {
            back: Pile::new(),
            front: Pile::new(),
        }
    }
}

impl<F: Face> Tableau<F> {
    /// Create a column from its two piles.
    #[must_use]
    pub fn new(back: Pile<F>, front: Pile<F>) -> Self {
        Self { back, front }
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.back.len() + self.front.len()
    }

    /// Check if the column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.back.is_empty() && self.front.is_empty()
    }

    /// Whether `card` may be placed on this column.
    ///
    /// Descending rank with alternating color on a face-up card; only a
    /// King on an empty column.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        match self.front.top() {
            None => self.back.is_empty() && card.rank == Rank::King,
            Some(top) => top.known().is_some_and(|below| card.stacks_on(below)),
        }
    }

    /// Take the top `n` front cards, flipping one back card if the front
    /// empties.
    pub fn take_from_front(&mut self, n: usize) -> Result<Taken<F>, StackError> {
        let cards = self.front.remove(n)?;

        let flipped = if self.front.is_empty() && !self.back.is_empty() {
            let card = self.back.pop()?;
            self.front.add([card]);
            Some(card)
        } else {
            None
        };

        Ok(Taken { cards, flipped })
    }

    /// Undo `take_from_front`: turn the flipped card back down, then
    /// return `cards` to the front.
    pub fn undo_take_from_front(
        &mut self,
        cards: impl IntoIterator<Item = F>,
        flipped: bool,
    ) -> Result<(), StackError> {
        if flipped {
            let card = self.front.pop()?;
            self.back.add([card.conceal()]);
        }
        self.front.add(cards);
        Ok(())
    }

    /// Put cards on the front.
    pub fn put_onto_front(&mut self, cards: impl IntoIterator<Item = F>) {
        self.front.add(cards);
    }

    /// Take back the top `n` front cards put there by `put_onto_front`.
    pub fn undo_put_onto_front(&mut self, n: usize) -> Result<Batch<F>, StackError> {
        self.front.remove(n)
    }
}

impl Tableau<Card> {
    /// Observer view: back face down, front face up.
    #[must_use]
    pub fn pov(&self) -> Tableau<CardView> {
        Tableau {
            back: self.back.concealed(),
            front: self.front.shown(),
        }
    }
}
