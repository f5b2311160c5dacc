//! Error types.
//!
//! Illegal moves and empty undo are ordinary, reported outcomes. A stack
//! error means a record asked the zones for something they could not do,
//! such as taking cards they lack or touching a pile that does not exist.
//! It surfaces as an error rather than a panic; records produced by the
//! engine never cause one.

use derive_more::{Display, Error};

use crate::rules::MoveKind;

/// Pile access past the available cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum StackError {
    #[display("cannot take {requested} cards from a pile of {available}")]
    Underflow { requested: usize, available: usize },

    /// A record names a tableau or foundation the layout does not have.
    #[display("no pile at index {index}")]
    MissingPile { index: usize },
}

/// Why a move or undo did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The move fails its legality check. Nothing changed.
    #[display("{kind} is not legal in this position")]
    Illegal { kind: MoveKind },

    /// Undo requested with an empty history. Nothing changed.
    #[display("nothing to undo")]
    NothingToUndo,

    /// Internal invariant violation while mutating zones.
    #[display("zone mutation failed: {source}")]
    Stack { source: StackError },
}

impl From<StackError> for MoveError {
    fn from(source: StackError) -> Self {
        MoveError::Stack { source }
    }
}

/// Malformed FEN input.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("malformed {what} FEN: {input:?}")]
pub struct FenError {
    /// Which entity was being decoded.
    pub what: &'static str,
    /// The offending input fragment.
    pub input: String,
}

impl FenError {
    /// Create a decode error for `what` at `input`.
    pub fn new(what: &'static str, input: impl Into<String>) -> Self {
        Self {
            what,
            input: input.into(),
        }
    }
}

/// A custom deck that is not exactly one full deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum DeckError {
    #[display("deck has {count} cards, expected {expected}")]
    WrongSize { count: usize, expected: usize },

    #[display("deck contains {card} more than once")]
    Duplicate { card: crate::cards::Card },
}

/// Binary snapshot encode/decode failure.
#[derive(Debug, Display, Error)]
#[display("game snapshot failed: {source}")]
pub struct SnapshotError {
    source: bincode::Error,
}

impl From<bincode::Error> for SnapshotError {
    fn from(source: bincode::Error) -> Self {
        Self { source }
    }
}
