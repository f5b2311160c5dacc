//! Game state: authoritative and point-of-view.
//!
//! ## GameState
//!
//! The authoritative layout. Every card identity is present.
//!
//! ## GamePov
//!
//! The same layout as an observer sees it: draw pile, cycled pile and
//! tableau backs hold opaque markers; waste, tableau fronts and
//! foundations are face up. A `GamePov` is projected once from a
//! `GameState` and afterwards only advanced by replaying move records (see
//! `GamePov::replay`), never re-projected.
//!
//! Both are instantiations of `Solitaire<F>`, so the legality predicates
//! read either one through the same fields.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::config::Settings;
use super::error::MoveError;
use crate::cards::{Card, CardView, Deck, Face, Pile, DECK_SIZE};
use crate::rules::MoveRecord;
use crate::zones::{Foundation, Stock, Tableau};

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundations.
pub const FOUNDATION_COUNT: usize = 4;

/// A Klondike layout over some card face type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solitaire<F: Face> {
    /// Settings, fixed for the game.
    pub settings: Settings,

    /// Number of recycles performed so far.
    pub recycle_count: u32,

    pub stock: Stock<F>,

    pub tableaus: [Tableau<F>; TABLEAU_COUNT],

    pub foundations: [Foundation<F>; FOUNDATION_COUNT],
}

/// Authoritative state.
pub type GameState = Solitaire<Card>;

/// Observer state.
pub type GamePov = Solitaire<CardView>;

impl<F: Face> Solitaire<F> {
    /// An empty layout with the given settings.
    #[must_use]
    pub fn empty(settings: Settings) -> Self {
        Self {
            settings,
            recycle_count: 0,
            stock: Stock::default(),
            tableaus: Default::default(),
            foundations: Default::default(),
        }
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.tableaus.iter().map(Tableau::len).sum::<usize>()
            + self.foundations.iter().map(Foundation::len).sum::<usize>()
    }

    /// Check if every foundation is complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Sizes of every pile, in a fixed order: draw, waste, cycled, then
    /// back and front of each tableau, then each foundation.
    ///
    /// Equal for a state and any POV kept in sync with it.
    #[must_use]
    pub fn pile_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![
            self.stock.draw_pile.len(),
            self.stock.waste.len(),
            self.stock.cycled_pile.len(),
        ];
        for tableau in &self.tableaus {
            sizes.push(tableau.back.len());
            sizes.push(tableau.front.len());
        }
        sizes.extend(self.foundations.iter().map(Foundation::len));
        sizes
    }

    /// Check that this layout could occur in a game.
    ///
    /// - exactly one deck's worth of slots, no card disclosed twice
    /// - face-down piles hold concealed slots, face-up piles known cards
    /// - no column has back cards under an empty front
    ///
    /// Foundation runs are checked when a foundation is built from FEN.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let face_down = || {
            self.stock
                .draw_pile
                .iter()
                .chain(self.stock.cycled_pile.iter())
                .chain(self.tableaus.iter().flat_map(|t| t.back.iter()))
        };
        let face_up = || {
            self.stock
                .waste
                .iter()
                .chain(self.tableaus.iter().flat_map(|t| t.front.iter()))
                .chain(self.foundations.iter().flat_map(|f| f.pile.iter()))
        };

        if self.card_count() != DECK_SIZE {
            return false;
        }
        if self
            .tableaus
            .iter()
            .any(|t| t.front.is_empty() && !t.back.is_empty())
        {
            return false;
        }
        if !face_down().all(|slot| slot == slot.conceal())
            || !face_up().all(|slot| slot.known().is_some())
        {
            return false;
        }

        let mut seen = FxHashSet::default();
        face_down()
            .chain(face_up())
            .filter_map(Face::known)
            .all(|card| seen.insert(card))
    }
}

impl GameState {
    /// Deal a new game from `deck`.
    ///
    /// Column `i` gets `i` face-down cards and one face-up card, in deck
    /// order. The remaining 24 cards form the draw pile, last card on top.
    #[must_use]
    pub fn deal(settings: Settings, deck: &Deck) -> Self {
        let mut cards = deck.cards().iter().copied();

        let tableaus = std::array::from_fn(|column| {
            let back: Pile<Card> = cards.by_ref().take(column).collect();
            let front: Pile<Card> = cards.by_ref().take(1).collect();
            Tableau::new(back, front)
        });

        Self {
            settings,
            recycle_count: 0,
            stock: Stock::new(cards.collect()),
            tableaus,
            foundations: Default::default(),
        }
    }

    /// Project the observer's view of this state.
    #[must_use]
    pub fn pov(&self) -> GamePov {
        Solitaire {
            settings: self.settings,
            recycle_count: self.recycle_count,
            stock: self.stock.pov(),
            tableaus: std::array::from_fn(|i| self.tableaus[i].pov()),
            foundations: std::array::from_fn(|i| self.foundations[i].pov()),
        }
    }

    /// Every card in the layout, zone by zone.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        let stock = self
            .stock
            .draw_pile
            .iter()
            .chain(self.stock.waste.iter())
            .chain(self.stock.cycled_pile.iter());
        let tableaus = self
            .tableaus
            .iter()
            .flat_map(|t| t.back.iter().chain(t.front.iter()));
        let foundations = self.foundations.iter().flat_map(|f| f.pile.iter());

        stock.chain(tableaus).chain(foundations)
    }

    /// Check that the layout holds exactly one full deck.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.cards().all(|card| seen.insert(card)) && seen.len() == DECK_SIZE
    }
}

impl GamePov {
    /// Advance this view by a move the authoritative state already made.
    ///
    /// Runs the move blind against the view, then patches in the card
    /// identities the record discloses.
    pub fn replay(&mut self, record: &MoveRecord) -> Result<(), MoveError> {
        let mv = record.mv();
        trace!(%mv, "replaying move on pov");

        let _blind = mv.apply(self)?;
        record.finalize_apply_pov(self)?;
        Ok(())
    }

    /// Step this view back over `record`, which must be the last move
    /// replayed.
    pub fn rewind(&mut self, record: &MoveRecord) -> Result<(), MoveError> {
        trace!(mv = %record.mv(), "rewinding move on pov");

        record.undo(self)?;
        Ok(())
    }

    /// Number of opaque slots in the view.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.stock.draw_pile.hidden_count()
            + self.stock.waste.hidden_count()
            + self.stock.cycled_pile.hidden_count()
            + self
                .tableaus
                .iter()
                .map(|t| t.back.hidden_count() + t.front.hidden_count())
                .sum::<usize>()
            + self
                .foundations
                .iter()
                .map(|f| f.pile.hidden_count())
                .sum::<usize>()
    }
}
