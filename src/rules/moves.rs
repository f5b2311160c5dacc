//! Moves: the closed set of player actions.
//!
//! A `Move` is the input of an action (which piles, how many cards). It
//! knows whether it is legal in a layout and how to perform itself,
//! producing a `MoveRecord` that holds everything needed to undo it.
//!
//! Legality only ever reads public information (waste, fronts,
//! foundations, pile sizes), so it gives the same answer on a `GameState`
//! and on any `GamePov` in sync with it.

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::record::MoveRecord;
use crate::cards::Face;
use crate::core::{MoveError, Solitaire, StackError, FOUNDATION_COUNT, TABLEAU_COUNT};

/// Kind of a move, without its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MoveKind {
    HitStock,
    Recycle,
    TableauToTableau,
    WasteToTableau,
    WasteToFoundation,
    TableauToFoundation,
    FoundationToTableau,
}

impl MoveKind {
    /// Every kind.
    pub const ALL: [MoveKind; 7] = [
        MoveKind::HitStock,
        MoveKind::Recycle,
        MoveKind::TableauToTableau,
        MoveKind::WasteToTableau,
        MoveKind::WasteToFoundation,
        MoveKind::TableauToFoundation,
        MoveKind::FoundationToTableau,
    ];

    /// FEN tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            MoveKind::HitStock => "hit",
            MoveKind::Recycle => "recycle",
            MoveKind::TableauToTableau => "tt",
            MoveKind::WasteToTableau => "wt",
            MoveKind::WasteToFoundation => "wf",
            MoveKind::TableauToFoundation => "tf",
            MoveKind::FoundationToTableau => "ft",
        }
    }

    /// Parse a FEN tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Number of pile/count arguments a move of this kind carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            MoveKind::HitStock | MoveKind::Recycle => 0,
            MoveKind::WasteToTableau | MoveKind::WasteToFoundation => 1,
            MoveKind::TableauToFoundation | MoveKind::FoundationToTableau => 2,
            MoveKind::TableauToTableau => 3,
        }
    }
}

/// A player action with its input. Pile indices are zero-based.
///
/// ## Example
///
/// ```
/// use rust_klondike::cards::Deck;
/// use rust_klondike::core::{GameState, Settings};
/// use rust_klondike::rules::Move;
///
/// let mut state = GameState::deal(Settings::default(), &Deck::ordered());
///
/// assert!(Move::HitStock.legal(&state));
/// let record = Move::HitStock.apply(&mut state).unwrap();
/// assert_eq!(state.stock.waste.len(), 1);
///
/// record.undo(&mut state).unwrap();
/// assert_eq!(state, GameState::deal(Settings::default(), &Deck::ordered()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Turn the next batch from the draw pile.
    HitStock,
    /// Put waste and cycled pile back under the empty draw pile.
    Recycle,
    /// Move the top `count` front cards of one column onto another.
    TableauToTableau { from: usize, to: usize, count: usize },
    WasteToTableau { to: usize },
    WasteToFoundation { to: usize },
    TableauToFoundation { from: usize, to: usize },
    FoundationToTableau { from: usize, to: usize },
}

impl Move {
    /// Kind of this move.
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        match self {
            Move::HitStock => MoveKind::HitStock,
            Move::Recycle => MoveKind::Recycle,
            Move::TableauToTableau { .. } => MoveKind::TableauToTableau,
            Move::WasteToTableau { .. } => MoveKind::WasteToTableau,
            Move::WasteToFoundation { .. } => MoveKind::WasteToFoundation,
            Move::TableauToFoundation { .. } => MoveKind::TableauToFoundation,
            Move::FoundationToTableau { .. } => MoveKind::FoundationToTableau,
        }
    }

    /// Whether this move is legal in `state`.
    ///
    /// Out-of-range pile indices make a move illegal.
    #[must_use]
    pub fn legal<F: Face>(&self, state: &Solitaire<F>) -> bool {
        match *self {
            Move::HitStock => !state.stock.draw_pile.is_empty(),

            Move::Recycle => {
                let stock = &state.stock;
                stock.draw_pile.is_empty()
                    && !(stock.waste.is_empty() && stock.cycled_pile.is_empty())
                    && state.settings.allows_recycle(state.recycle_count)
            }

            Move::TableauToTableau { from, to, count } => {
                let (Some(source), Some(target)) = (state.tableaus.get(from), state.tableaus.get(to)) else {
                    return false;
                };
                if from == to || count == 0 || count > source.front.len() {
                    return false;
                }
                source
                    .front
                    .get(source.front.len() - count)
                    .and_then(Face::known)
                    .is_some_and(|base| target.accepts(base))
            }

            Move::WasteToTableau { to } => match (state.stock.waste.known_top(), state.tableaus.get(to)) {
                (Some(card), Some(target)) => target.accepts(card),
                _ => false,
            },

            Move::WasteToFoundation { to } => {
                match (state.stock.waste.known_top(), state.foundations.get(to)) {
                    (Some(card), Some(foundation)) => foundation.can_accept(&[card]),
                    _ => false,
                }
            }

            Move::TableauToFoundation { from, to } => {
                let source = state.tableaus.get(from).and_then(|t| t.front.known_top());
                match (source, state.foundations.get(to)) {
                    (Some(card), Some(foundation)) => foundation.can_accept(&[card]),
                    _ => false,
                }
            }

            Move::FoundationToTableau { from, to } => {
                let source = state.foundations.get(from).and_then(|f| f.top_card());
                match (source, state.tableaus.get(to)) {
                    (Some(card), Some(target)) => target.accepts(card),
                    _ => false,
                }
            }
        }
    }

    /// Check legality, then perform the move.
    ///
    /// Returns `MoveError::Illegal` without touching `state` if the move
    /// is not legal.
    pub fn apply<F: Face>(self, state: &mut Solitaire<F>) -> Result<MoveRecord<F>, MoveError> {
        if !self.legal(state) {
            return Err(MoveError::Illegal { kind: self.kind() });
        }
        Ok(self.apply_legal(state)?)
    }

    /// Perform a move already known to be legal.
    pub(crate) fn apply_legal<F: Face>(self, state: &mut Solitaire<F>) -> Result<MoveRecord<F>, StackError> {
        let record = match self {
            Move::HitStock => {
                let hit = state.stock.hit(state.settings.draw_count())?;
                MoveRecord::HitStock {
                    revealed: hit.revealed,
                    displaced_waste: hit.displaced_waste,
                }
            }

            Move::Recycle => {
                let recycled = state.stock.recycle();
                state.recycle_count += 1;
                MoveRecord::Recycle {
                    displaced_waste: recycled.displaced_waste,
                    moved: recycled.moved,
                }
            }

            Move::TableauToTableau { from, to, count } => {
                let taken = state.tableaus[from].take_from_front(count)?;
                state.tableaus[to].put_onto_front(taken.cards);
                MoveRecord::TableauToTableau {
                    from,
                    to,
                    count,
                    flipped: taken.flipped,
                }
            }

            Move::WasteToTableau { to } => {
                let card = state.stock.draw_from_waste()?;
                state.tableaus[to].put_onto_front([card]);
                MoveRecord::WasteToTableau { to, card }
            }

            Move::WasteToFoundation { to } => {
                let card = state.stock.draw_from_waste()?;
                state.foundations[to].accept(card);
                MoveRecord::WasteToFoundation { to, card }
            }

            Move::TableauToFoundation { from, to } => {
                let taken = state.tableaus[from].take_from_front(1)?;
                state.foundations[to].accept(taken.cards[0]);
                MoveRecord::TableauToFoundation {
                    from,
                    to,
                    card: taken.cards[0],
                    flipped: taken.flipped,
                }
            }

            Move::FoundationToTableau { from, to } => {
                let card = state.foundations[from].take_top()?;
                state.tableaus[to].put_onto_front([card]);
                MoveRecord::FoundationToTableau { from, to, card }
            }
        };

        Ok(record)
    }

    /// Every legal move in `state`.
    #[must_use]
    pub fn legal_moves<F: Face>(state: &Solitaire<F>) -> Vec<Move> {
        let mut candidates = vec![Move::HitStock, Move::Recycle];

        for to in 0..TABLEAU_COUNT {
            candidates.push(Move::WasteToTableau { to });
            for from in 0..TABLEAU_COUNT {
                for count in 1..=state.tableaus[from].front.len() {
                    candidates.push(Move::TableauToTableau { from, to, count });
                }
            }
            for foundation in 0..FOUNDATION_COUNT {
                candidates.push(Move::FoundationToTableau { from: foundation, to });
            }
        }

        for to in 0..FOUNDATION_COUNT {
            candidates.push(Move::WasteToFoundation { to });
            for from in 0..TABLEAU_COUNT {
                candidates.push(Move::TableauToFoundation { from, to });
            }
        }

        candidates.retain(|mv| mv.legal(state));
        candidates
    }
}

impl fmt::Display for Move {
    /// Move FEN, see `crate::fen`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::fen::Fen::fen(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Pile, Rank, Suit};
    use crate::core::{GameState, Settings, TurningCards, TurningLimit};
    use crate::zones::Tableau;

    fn c(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::from_value(rank).unwrap())
    }

    fn pile(cards: &[Card]) -> Pile<Card> {
        cards.iter().copied().collect()
    }

    fn fresh() -> GameState {
        GameState::deal(Settings::default(), &Deck::ordered())
    }

    #[test]
    fn test_hit_legal_until_draw_empty() {
        let mut state = fresh();

        for _ in 0..24 {
            assert!(Move::HitStock.legal(&state));
            Move::HitStock.apply(&mut state).unwrap();
        }

        assert!(!Move::HitStock.legal(&state));
        assert_eq!(
            Move::HitStock.apply(&mut state),
            Err(MoveError::Illegal {
                kind: MoveKind::HitStock
            })
        );
    }

    #[test]
    fn test_recycle_requires_empty_draw() {
        let mut state = fresh();
        assert!(!Move::Recycle.legal(&state));

        while Move::HitStock.legal(&state) {
            Move::HitStock.apply(&mut state).unwrap();
        }
        assert!(Move::Recycle.legal(&state));

        Move::Recycle.apply(&mut state).unwrap();
        assert_eq!(state.recycle_count, 1);
        assert_eq!(state.stock.draw_pile.len(), 24);
    }

    #[test]
    fn test_recycle_limit() {
        let settings = Settings::new()
            .with_cards(TurningCards::ThreeCards)
            .with_limit(TurningLimit::OnePass);
        let mut state = GameState::deal(settings, &Deck::ordered());

        for _ in 0..2 {
            while Move::HitStock.legal(&state) {
                Move::HitStock.apply(&mut state).unwrap();
            }
            if state.recycle_count == 0 {
                assert!(Move::Recycle.legal(&state));
                Move::Recycle.apply(&mut state).unwrap();
            }
        }

        assert_eq!(state.recycle_count, 1);
        assert!(!Move::Recycle.legal(&state));
    }

    #[test]
    fn test_recycle_needs_cards() {
        let mut state = GameState::empty(Settings::default());
        assert!(!Move::Recycle.legal(&state));

        state.stock.cycled_pile.add([c(Suit::Hearts, 4)]);
        assert!(Move::Recycle.legal(&state));
    }

    #[test]
    fn test_tableau_to_tableau_rules() {
        let mut state = GameState::empty(Settings::default());
        state.tableaus[0] = Tableau::new(pile(&[c(Suit::Clubs, 1)]), pile(&[c(Suit::Hearts, 8)]));
        state.tableaus[1] = Tableau::new(pile(&[]), pile(&[c(Suit::Spades, 9)]));
        state.tableaus[2] = Tableau::new(pile(&[]), pile(&[c(Suit::Diamonds, 9)]));

        assert!(Move::TableauToTableau { from: 0, to: 1, count: 1 }.legal(&state));
        // Same color
        assert!(!Move::TableauToTableau { from: 0, to: 2, count: 1 }.legal(&state));
        // Not enough cards
        assert!(!Move::TableauToTableau { from: 0, to: 1, count: 2 }.legal(&state));
        assert!(!Move::TableauToTableau { from: 0, to: 1, count: 0 }.legal(&state));
        // Onto itself or out of range
        assert!(!Move::TableauToTableau { from: 0, to: 0, count: 1 }.legal(&state));
        assert!(!Move::TableauToTableau { from: 0, to: 7, count: 1 }.legal(&state));
        // Only a King may go to an empty column
        assert!(!Move::TableauToTableau { from: 1, to: 3, count: 1 }.legal(&state));
    }

    #[test]
    fn test_tableau_to_tableau_flip_scores() {
        let mut state = GameState::empty(Settings::default());
        state.tableaus[0] = Tableau::new(pile(&[c(Suit::Clubs, 1)]), pile(&[c(Suit::Hearts, 8)]));
        state.tableaus[1] = Tableau::new(pile(&[]), pile(&[c(Suit::Spades, 9)]));

        let record = Move::TableauToTableau { from: 0, to: 1, count: 1 }
            .apply(&mut state)
            .unwrap();

        assert_eq!(record.score_delta(), 10);
        assert_eq!(state.tableaus[0].front.top(), Some(c(Suit::Clubs, 1)));
        assert!(state.tableaus[0].back.is_empty());
        assert_eq!(state.tableaus[1].front.len(), 2);
    }

    #[test]
    fn test_run_moves_onto_king_column() {
        let mut state = GameState::empty(Settings::default());
        state.tableaus[0] = Tableau::new(
            pile(&[c(Suit::Clubs, 2)]),
            pile(&[c(Suit::Hearts, 13), c(Suit::Spades, 12), c(Suit::Diamonds, 11)]),
        );

        let mv = Move::TableauToTableau { from: 0, to: 4, count: 3 };
        assert!(mv.legal(&state));

        let record = mv.apply(&mut state).unwrap();
        assert_eq!(state.tableaus[4].front.len(), 3);
        assert_eq!(state.tableaus[0].front.top(), Some(c(Suit::Clubs, 2)));
        assert_eq!(record.score_delta(), 10);
    }

    #[test]
    fn test_waste_moves() {
        let mut state = GameState::empty(Settings::default());
        state.stock.waste.add([c(Suit::Hearts, 1)]);
        state.tableaus[0] = Tableau::new(pile(&[]), pile(&[c(Suit::Spades, 2)]));

        assert!(Move::WasteToTableau { to: 0 }.legal(&state));
        assert!(Move::WasteToFoundation { to: 2 }.legal(&state));
        assert!(!Move::WasteToFoundation { to: 4 }.legal(&state));

        let record = Move::WasteToFoundation { to: 2 }.apply(&mut state).unwrap();
        assert_eq!(record.score_delta(), 30);
        assert_eq!(state.foundations[2].top_card(), Some(c(Suit::Hearts, 1)));
        assert!(!Move::WasteToTableau { to: 0 }.legal(&state));
    }

    #[test]
    fn test_foundation_to_tableau() {
        let mut state = GameState::empty(Settings::default());
        state.foundations[1].accept(c(Suit::Hearts, 1));
        state.foundations[1].accept(c(Suit::Hearts, 2));
        state.tableaus[3] = Tableau::new(pile(&[]), pile(&[c(Suit::Clubs, 3)]));

        let mv = Move::FoundationToTableau { from: 1, to: 3 };
        assert!(mv.legal(&state));
        assert!(!Move::FoundationToTableau { from: 0, to: 3 }.legal(&state));

        let record = mv.apply(&mut state).unwrap();
        assert_eq!(record.score_delta(), -30);
        assert_eq!(state.tableaus[3].front.top(), Some(c(Suit::Hearts, 2)));
    }

    #[test]
    fn test_legal_moves_fresh_deal() {
        let state = fresh();
        let moves = Move::legal_moves(&state);

        assert!(moves.contains(&Move::HitStock));
        assert!(!moves.contains(&Move::Recycle));
        // The Ace of diamonds is face up on column 0
        assert!(moves.contains(&Move::TableauToFoundation { from: 0, to: 0 }));
        assert!(moves.iter().all(|mv| mv.legal(&state)));
    }

    #[test]
    fn test_legal_moves_same_on_pov() {
        let mut state = GameState::deal(Settings::default(), &Deck::from_seed(11));
        for _ in 0..5 {
            Move::HitStock.apply(&mut state).unwrap();
        }

        assert_eq!(Move::legal_moves(&state), Move::legal_moves(&state.pov()));
    }
}
