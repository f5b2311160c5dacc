//! The observer's side of a game.
//!
//! A `GameView` is created once from a game and then follows it by
//! replaying the records the game hands out. It never sees a concealed
//! card identity: the only identities it learns are the ones the records
//! disclose (hit cards and flipped tableau cards).

use serde::{Deserialize, Serialize};

use crate::core::{GamePov, MoveError};
use crate::rules::{score, MoveRecord};

/// Observer state plus the public counters of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pov: GamePov,
    score: i32,
    move_count: u32,
    history_len: usize,
}

impl GameView {
    #[must_use]
    pub fn new(pov: GamePov, score: i32, move_count: u32, history_len: usize) -> Self {
        Self {
            pov,
            score,
            move_count,
            history_len,
        }
    }

    #[must_use]
    pub fn pov(&self) -> &GamePov {
        &self.pov
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history_len > 0
    }

    /// Follow a move the game applied.
    pub fn apply(&mut self, record: &MoveRecord) -> Result<(), MoveError> {
        self.pov.replay(record)?;
        self.score += record.score_delta();
        self.move_count += 1;
        self.history_len += 1;
        Ok(())
    }

    /// Follow an undo the game performed.
    pub fn undo(&mut self, record: &MoveRecord) -> Result<(), MoveError> {
        if self.history_len == 0 {
            return Err(MoveError::NothingToUndo);
        }
        self.pov.rewind(record)?;
        self.score += score::UNDO;
        self.move_count += 1;
        self.history_len -= 1;
        Ok(())
    }
}
