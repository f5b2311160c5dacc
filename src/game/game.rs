//! The game wrapper: authoritative state plus score and history.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::view::GameView;
use crate::cards::Deck;
use crate::core::{GamePov, GameState, MoveError, Settings, SnapshotError};
use crate::rules::{Move, MoveRecord};

/// A game in progress.
///
/// Score and move count change only here: every accepted move adds its
/// delta and every undo adds the undo penalty, both counting as one move.
///
/// ## Example
///
/// ```
/// use rust_klondike::cards::Deck;
/// use rust_klondike::core::Settings;
/// use rust_klondike::game::Game;
/// use rust_klondike::rules::Move;
///
/// let mut game = Game::new(Settings::default(), &Deck::ordered());
///
/// // The Ace of diamonds starts face up on the first column
/// game.apply(Move::TableauToFoundation { from: 0, to: 0 }).unwrap();
/// assert_eq!(game.score(), 20);
///
/// game.undo().unwrap();
/// assert_eq!(game.score(), -60);
/// assert_eq!(game.move_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    state: GameState,
    score: i32,
    move_count: u32,
    history: Vector<MoveRecord>,
}

impl Game {
    /// Deal a new game from `deck`.
    #[must_use]
    pub fn new(settings: Settings, deck: &Deck) -> Self {
        Self::from_state(GameState::deal(settings, deck))
    }

    /// Start from an arbitrary position with zero score and no history.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            score: 0,
            move_count: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Applied moves plus undos.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Records of the moves not yet undone, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Legal moves in the current position.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::legal_moves(&self.pov())
    }

    /// Apply `mv` if the observer could legally make it.
    ///
    /// An illegal move is reported and changes nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        if !mv.legal(&self.pov()) {
            debug!("rejected illegal move");
            return Err(MoveError::Illegal { kind: mv.kind() });
        }

        let record = mv.apply_legal(&mut self.state)?;
        self.score += record.score_delta();
        self.move_count += 1;
        self.history.push_back(record.clone());

        debug!(score = self.score, delta = record.score_delta(), "applied move");
        Ok(record)
    }

    /// Undo the most recent move.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> Result<MoveRecord, MoveError> {
        let record = self.history.back().cloned().ok_or(MoveError::NothingToUndo)?;

        let delta = record.undo(&mut self.state)?;
        self.history.pop_back();
        self.score += delta;
        self.move_count += 1;

        debug!(mv = %record.mv(), score = self.score, "undid move");
        Ok(record)
    }

    /// A fresh observer projection of the current state.
    #[must_use]
    pub fn pov(&self) -> GamePov {
        self.state.pov()
    }

    /// A fresh view: projection plus score, move count and history depth.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::new(self.pov(), self.score, self.move_count, self.history.len())
    }

    /// Binary snapshot of the whole game.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a game from `to_bytes` output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::{StackError, TurningCards};
    use crate::rules::MoveKind;

    fn ordered() -> Game {
        Game::new(Settings::default(), &Deck::ordered())
    }

    #[test]
    fn test_new_game() {
        let game = ordered();

        assert_eq!(game.score(), 0);
        assert_eq!(game.move_count(), 0);
        assert!(!game.can_undo());
        assert!(!game.is_won());
        assert!(game.state().is_conserved());
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut game = ordered();
        let before = game.clone();

        let result = game.apply(Move::Recycle);

        assert_eq!(result, Err(MoveError::Illegal { kind: MoveKind::Recycle }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_is_illegal() {
        let mut game = ordered();

        assert!(game.apply(Move::WasteToTableau { to: 9 }).is_err());
        assert!(game.apply(Move::TableauToFoundation { from: 0, to: 4 }).is_err());
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = ordered();

        assert_eq!(game.undo(), Err(MoveError::NothingToUndo));
        assert_eq!(game.score(), 0);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_undo_of_corrupt_record_changes_nothing() {
        let mut game = ordered();
        game.apply(Move::HitStock).unwrap();
        // As a tampered snapshot could hold
        game.history.push_back(MoveRecord::WasteToFoundation {
            to: 6,
            card: Card::new(Suit::Diamonds, Rank::Four),
        });
        let before = game.clone();

        let result = game.undo();

        assert_eq!(
            result,
            Err(MoveError::Stack {
                source: StackError::MissingPile { index: 6 }
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_and_undo_score() {
        let mut game = ordered();

        let record = game.apply(Move::TableauToFoundation { from: 0, to: 0 }).unwrap();
        assert_eq!(record.kind(), MoveKind::TableauToFoundation);
        assert_eq!(game.score(), 20);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.history().len(), 1);

        let undone = game.undo().unwrap();
        assert_eq!(undone, record);
        assert_eq!(game.score(), -60);
        assert_eq!(game.move_count(), 2);
        assert!(!game.can_undo());
        assert_eq!(game.state(), ordered().state());
    }

    #[test]
    fn test_hits_and_undos() {
        let settings = Settings::new().with_cards(TurningCards::ThreeCards);
        let mut game = Game::new(settings, &Deck::from_seed(5));
        let start = game.state().clone();

        for _ in 0..3 {
            game.apply(Move::HitStock).unwrap();
        }
        for _ in 0..3 {
            game.undo().unwrap();
        }

        assert_eq!(game.state(), &start);
        assert_eq!(game.score(), -240);
        assert_eq!(game.move_count(), 6);
    }

    #[test]
    fn test_view_tracks_game() {
        let mut game = ordered();
        game.apply(Move::HitStock).unwrap();

        let view = game.view();
        assert_eq!(view.pov(), &game.pov());
        assert_eq!(view.score(), game.score());
        assert_eq!(view.move_count(), 1);
        assert!(view.can_undo());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut game = Game::new(Settings::default(), &Deck::from_seed(9));
        game.apply(Move::HitStock).unwrap();
        game.apply(Move::HitStock).unwrap();
        game.undo().unwrap();

        let bytes = game.to_bytes().unwrap();
        let restored = Game::from_bytes(&bytes).unwrap();

        assert_eq!(restored, game);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(Game::from_bytes(&[1, 2, 3]).is_err());
    }
}
