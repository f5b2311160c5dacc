//! Move records: a move's input plus what it displaced.
//!
//! Each variant pairs the input of one move kind with the cards and counts
//! needed to invert it without looking at anything else. Records produced
//! by the authoritative state (`MoveRecord<Card>`) also carry every card
//! identity the move disclosed, which is what a `GamePov` needs to catch
//! up after replaying the move blind.

use serde::{Deserialize, Serialize};

use super::moves::{Move, MoveKind};
use super::score;
use crate::cards::{Batch, Card, Face};
use crate::core::{GamePov, Solitaire, StackError, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::zones::{Foundation, Tableau};

/// A performed move and its undo payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord<F: Face = Card> {
    HitStock {
        /// Cards turned onto the waste.
        revealed: Batch<F>,
        /// Waste pushed under the cycled pile.
        displaced_waste: Batch<F>,
    },
    Recycle {
        /// Waste at the time of the recycle.
        displaced_waste: Batch<F>,
        /// Cards moved under the draw pile.
        moved: usize,
    },
    TableauToTableau {
        from: usize,
        to: usize,
        count: usize,
        /// Card turned up on the source column.
        flipped: Option<F>,
    },
    WasteToTableau {
        to: usize,
        card: F,
    },
    WasteToFoundation {
        to: usize,
        card: F,
    },
    TableauToFoundation {
        from: usize,
        to: usize,
        card: F,
        flipped: Option<F>,
    },
    FoundationToTableau {
        from: usize,
        to: usize,
        card: F,
    },
}

impl<F: Face> MoveRecord<F> {
    /// Kind of the recorded move.
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        self.mv().kind()
    }

    /// The recorded move's input.
    #[must_use]
    pub fn mv(&self) -> Move {
        match *self {
            MoveRecord::HitStock { .. } => Move::HitStock,
            MoveRecord::Recycle { .. } => Move::Recycle,
            MoveRecord::TableauToTableau { from, to, count, .. } => {
                Move::TableauToTableau { from, to, count }
            }
            MoveRecord::WasteToTableau { to, .. } => Move::WasteToTableau { to },
            MoveRecord::WasteToFoundation { to, .. } => Move::WasteToFoundation { to },
            MoveRecord::TableauToFoundation { from, to, .. } => {
                Move::TableauToFoundation { from, to }
            }
            MoveRecord::FoundationToTableau { from, to, .. } => {
                Move::FoundationToTableau { from, to }
            }
        }
    }

    /// Score delta earned by the move.
    #[must_use]
    pub fn score_delta(&self) -> i32 {
        match self {
            MoveRecord::HitStock { .. } => score::HIT_STOCK,
            MoveRecord::Recycle { .. } => score::RECYCLE,
            MoveRecord::TableauToTableau { flipped: Some(_), .. } => score::TABLEAU_FLIP,
            MoveRecord::TableauToTableau { flipped: None, .. } => 0,
            MoveRecord::WasteToTableau { .. } => score::WASTE_TO_TABLEAU,
            MoveRecord::WasteToFoundation { .. } => score::WASTE_TO_FOUNDATION,
            MoveRecord::TableauToFoundation { .. } => score::TABLEAU_TO_FOUNDATION,
            MoveRecord::FoundationToTableau { .. } => score::FOUNDATION_TO_TABLEAU,
        }
    }

    /// Check every pile index the record names.
    fn check_piles(&self) -> Result<(), StackError> {
        match *self {
            MoveRecord::HitStock { .. } | MoveRecord::Recycle { .. } => Ok(()),
            MoveRecord::TableauToTableau { from, to, .. } => {
                in_range(from, TABLEAU_COUNT)?;
                in_range(to, TABLEAU_COUNT)
            }
            MoveRecord::WasteToTableau { to, .. } => in_range(to, TABLEAU_COUNT),
            MoveRecord::WasteToFoundation { to, .. } => in_range(to, FOUNDATION_COUNT),
            MoveRecord::TableauToFoundation { from, to, .. } => {
                in_range(from, TABLEAU_COUNT)?;
                in_range(to, FOUNDATION_COUNT)
            }
            MoveRecord::FoundationToTableau { from, to, .. } => {
                in_range(from, FOUNDATION_COUNT)?;
                in_range(to, TABLEAU_COUNT)
            }
        }
    }
}

fn in_range(index: usize, count: usize) -> Result<(), StackError> {
    if index < count {
        Ok(())
    } else {
        Err(StackError::MissingPile { index })
    }
}

fn tableau<F: Face>(state: &mut Solitaire<F>, index: usize) -> Result<&mut Tableau<F>, StackError> {
    state
        .tableaus
        .get_mut(index)
        .ok_or(StackError::MissingPile { index })
}

fn foundation<F: Face>(
    state: &mut Solitaire<F>,
    index: usize,
) -> Result<&mut Foundation<F>, StackError> {
    state
        .foundations
        .get_mut(index)
        .ok_or(StackError::MissingPile { index })
}

impl MoveRecord {
    /// Invert the recorded move on `state`, which must be exactly the
    /// layout the move produced.
    ///
    /// Works on the authoritative state and on a synced `GamePov` alike.
    /// Returns the undo penalty. A record naming a pile out of range is
    /// rejected before anything changes.
    pub fn undo<F: Face>(&self, state: &mut Solitaire<F>) -> Result<i32, StackError> {
        self.check_piles()?;

        match self {
            MoveRecord::HitStock {
                revealed,
                displaced_waste,
            } => {
                state.stock.undo_hit(revealed.len(), displaced_waste)?;
            }

            MoveRecord::Recycle {
                displaced_waste,
                moved,
            } => {
                state.stock.undo_recycle(displaced_waste, *moved)?;
                state.recycle_count = state.recycle_count.saturating_sub(1);
            }

            MoveRecord::TableauToTableau {
                from,
                to,
                count,
                flipped,
            } => {
                let cards = tableau(state, *to)?.undo_put_onto_front(*count)?;
                tableau(state, *from)?.undo_take_from_front(cards, flipped.is_some())?;
            }

            MoveRecord::WasteToTableau { to, .. } => {
                let cards = tableau(state, *to)?.undo_put_onto_front(1)?;
                for card in cards {
                    state.stock.undo_draw_from_waste(card);
                }
            }

            MoveRecord::WasteToFoundation { to, .. } => {
                let card = foundation(state, *to)?.undo_accept()?;
                state.stock.undo_draw_from_waste(card);
            }

            MoveRecord::TableauToFoundation { from, to, flipped, .. } => {
                let card = foundation(state, *to)?.undo_accept()?;
                tableau(state, *from)?.undo_take_from_front([card], flipped.is_some())?;
            }

            MoveRecord::FoundationToTableau { from, to, .. } => {
                let cards = tableau(state, *to)?.undo_put_onto_front(1)?;
                let source = foundation(state, *from)?;
                for card in cards {
                    source.undo_take_top(card);
                }
            }
        }

        Ok(score::UNDO)
    }

    /// Second phase of replaying this move on a view: disclose the cards
    /// the blind move could not know.
    ///
    /// A hit reveals the turned batch on the waste; a move that emptied a
    /// tableau front reveals the flipped card.
    pub fn finalize_apply_pov(&self, pov: &mut GamePov) -> Result<(), StackError> {
        match self {
            MoveRecord::HitStock { revealed, .. } => pov.stock.waste.reveal(revealed),

            MoveRecord::TableauToTableau {
                from,
                flipped: Some(card),
                ..
            }
            | MoveRecord::TableauToFoundation {
                from,
                flipped: Some(card),
                ..
            } => tableau(pov, *from)?.front.reveal(&[*card]),

            _ => Ok(()),
        }
    }
}
