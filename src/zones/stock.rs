//! The stock: draw pile, waste and cycled pile.
//!
//! A hit first pushes the current waste under the cycled pile, then turns
//! the next batch from the draw pile onto the waste, so the waste only
//! ever holds the latest batch. A recycle pushes the waste under the
//! cycled pile and the whole cycled pile under the draw pile. Because
//! both pushes go to the bottom, the draw pile after a full pass and a
//! recycle is identical to the draw pile before it.
//!
//! None of these operations check legality; the move layer does.

use serde::{Deserialize, Serialize};

use crate::cards::{Batch, Card, CardView, Face, Pile};
use crate::core::StackError;

/// Stock zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock<F: Face> {
    /// Face-down pile cards are turned from.
    pub draw_pile: Pile<F>,
    /// Latest turned batch, face up.
    pub waste: Pile<F>,
    /// Earlier batches awaiting the next recycle, face down.
    pub cycled_pile: Pile<F>,
}

/// Result of `Stock::hit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit<F> {
    /// Cards turned from the draw pile onto the waste.
    pub revealed: Batch<F>,
    /// Previous waste, now at the bottom of the cycled pile.
    pub displaced_waste: Batch<F>,
}

/// Result of `Stock::recycle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recycled<F> {
    /// Waste at the time of the recycle.
    pub displaced_waste: Batch<F>,
    /// Number of cards that went under the draw pile.
    pub moved: usize,
}

impl<F: Face> Default for Stock<F> {
    fn default() -> Self {
        Self {
            draw_pile: Pile::new(),
            waste: Pile::new(),
            cycled_pile: Pile::new(),
        }
    }
}

impl<F: Face> Stock<F> {
    /// A fresh stock with everything in the draw pile.
    #[must_use]
    pub fn new(draw_pile: Pile<F>) -> Self {
        Self {
            draw_pile,
            ..Self::default()
        }
    }

    /// Total number of cards in the stock.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.waste.len() + self.cycled_pile.len()
    }

    /// Check if all three piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turn up to `n` cards from the draw pile onto the waste.
    pub fn hit(&mut self, n: usize) -> Result<Hit<F>, StackError> {
        let displaced_waste = self.waste.remove_all();
        self.cycled_pile
            .unshift(displaced_waste.iter().map(|slot| slot.conceal()));

        let revealed = self.draw_pile.remove(n.min(self.draw_pile.len()))?;
        self.waste.add(revealed.iter().copied());

        Ok(Hit {
            revealed,
            displaced_waste,
        })
    }

    /// Undo a hit that turned `revealed` cards and displaced `displaced_waste`.
    pub fn undo_hit(&mut self, revealed: usize, displaced_waste: &[Card]) -> Result<(), StackError> {
        let turned = self.waste.remove(revealed)?;
        self.draw_pile.add(turned.into_iter().map(|slot| slot.conceal()));

        self.cycled_pile.shift(displaced_waste.len())?;
        self.waste.add(displaced_waste.iter().map(|&card| F::shown(card)));
        Ok(())
    }

    /// Move waste and cycled pile back under the draw pile.
    pub fn recycle(&mut self) -> Recycled<F> {
        let displaced_waste = self.waste.remove_all();
        self.cycled_pile
            .unshift(displaced_waste.iter().map(|slot| slot.conceal()));

        let cycled = self.cycled_pile.remove_all();
        let moved = cycled.len();
        self.draw_pile.unshift(cycled);

        Recycled {
            displaced_waste,
            moved,
        }
    }

    /// Undo a recycle that moved `moved` cards, `displaced_waste` of them
    /// from the waste.
    pub fn undo_recycle(&mut self, displaced_waste: &[Card], moved: usize) -> Result<(), StackError> {
        let cycled = self.draw_pile.shift(moved)?;
        self.cycled_pile.unshift(cycled);

        self.cycled_pile.shift(displaced_waste.len())?;
        self.waste.add(displaced_waste.iter().map(|&card| F::shown(card)));
        Ok(())
    }

    /// Take the top waste card.
    pub fn draw_from_waste(&mut self) -> Result<F, StackError> {
        self.waste.pop()
    }

    /// Put a card back on top of the waste.
    pub fn undo_draw_from_waste(&mut self, card: F) {
        self.waste.add([card]);
    }
}

impl Stock<Card> {
    /// Observer view: draw and cycled piles face down, waste face up.
    #[must_use]
    pub fn pov(&self) -> Stock<CardView> {
        Stock {
            draw_pile: self.draw_pile.concealed(),
            waste: self.waste.shown(),
            cycled_pile: self.cycled_pile.concealed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Stack, Suit};

    fn spades(n: u8) -> Stack {
        (1..=n)
            .filter_map(Rank::from_value)
            .map(|rank| Card::new(Suit::Spades, rank))
            .collect()
    }

    fn card(rank: u8) -> Card {
        Card::new(Suit::Spades, Rank::from_value(rank).unwrap())
    }

    #[test]
    fn test_hit_turns_top_cards() {
        let mut stock = Stock::new(spades(5));

        let hit = stock.hit(3).unwrap();

        assert_eq!(hit.revealed.as_slice(), &[card(3), card(4), card(5)]);
        assert!(hit.displaced_waste.is_empty());
        assert_eq!(stock.waste.known_top(), Some(card(5)));
        assert_eq!(stock.draw_pile.len(), 2);
    }

    #[test]
    fn test_hit_shunts_waste() {
        let mut stock = Stock::new(spades(5));
        stock.hit(3).unwrap();

        let hit = stock.hit(3).unwrap();

        // Only two cards left to turn
        assert_eq!(hit.revealed.as_slice(), &[card(1), card(2)]);
        assert_eq!(hit.displaced_waste.as_slice(), &[card(3), card(4), card(5)]);
        assert_eq!(stock.waste.len(), 2);
        assert_eq!(stock.cycled_pile.len(), 3);
        assert!(stock.draw_pile.is_empty());
    }

    #[test]
    fn test_undo_hit_restores() {
        let mut stock = Stock::new(spades(7));
        stock.hit(3).unwrap();
        let before = stock.clone();

        let hit = stock.hit(3).unwrap();
        stock.undo_hit(hit.revealed.len(), &hit.displaced_waste).unwrap();

        assert_eq!(stock, before);
    }

    #[test]
    fn test_recycle_restores_draw_order() {
        let original = spades(7);
        let mut stock = Stock::new(original.clone());
        while !stock.draw_pile.is_empty() {
            stock.hit(3).unwrap();
        }

        let recycled = stock.recycle();

        assert_eq!(recycled.moved, 7);
        assert_eq!(recycled.displaced_waste.as_slice(), &[card(1)]);
        assert_eq!(stock.draw_pile, original);
        assert!(stock.waste.is_empty());
        assert!(stock.cycled_pile.is_empty());
    }

    #[test]
    fn test_undo_recycle_restores() {
        let mut stock = Stock::new(spades(7));
        for _ in 0..3 {
            stock.hit(3).unwrap();
        }
        let before = stock.clone();

        let recycled = stock.recycle();
        stock
            .undo_recycle(&recycled.displaced_waste, recycled.moved)
            .unwrap();

        assert_eq!(stock, before);
    }

    #[test]
    fn test_draw_from_waste() {
        let mut stock = Stock::new(spades(3));
        assert!(stock.draw_from_waste().is_err());

        stock.hit(1).unwrap();
        let drawn = stock.draw_from_waste().unwrap();
        assert_eq!(drawn, card(3));
        assert!(stock.waste.is_empty());

        stock.undo_draw_from_waste(drawn);
        assert_eq!(stock.waste.known_top(), Some(card(3)));
    }

    #[test]
    fn test_pov_hides_draw_and_cycled() {
        let mut stock = Stock::new(spades(7));
        stock.hit(3).unwrap();
        stock.hit(3).unwrap();

        let pov = stock.pov();

        assert_eq!(pov.draw_pile.hidden_count(), 1);
        assert_eq!(pov.cycled_pile.hidden_count(), 3);
        assert_eq!(pov.waste.hidden_count(), 0);
        assert_eq!(pov.waste.known_top(), Some(card(4)));
        assert_eq!(pov.len(), stock.len());
    }

    #[test]
    fn test_pov_stock_conceals_on_shunt() {
        let mut state = Stock::new(spades(6));
        let mut pov = state.pov();

        let hit = state.hit(3).unwrap();
        pov.hit(3).unwrap();
        pov.waste.reveal(&hit.revealed).unwrap();
        assert_eq!(pov, state.pov());

        let hit = state.hit(3).unwrap();
        pov.hit(3).unwrap();
        pov.waste.reveal(&hit.revealed).unwrap();
        assert_eq!(pov, state.pov());

        let recycled = state.recycle();
        pov.recycle();
        assert_eq!(pov, state.pov());

        state
            .undo_recycle(&recycled.displaced_waste, recycled.moved)
            .unwrap();
        pov.undo_recycle(&recycled.displaced_waste, recycled.moved)
            .unwrap();
        assert_eq!(pov, state.pov());
    }
}
