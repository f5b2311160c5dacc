//! # rust-klondike
//!
//! A reversible Klondike solitaire move engine with an observer view and a
//! canonical text encoding.
//!
//! ## Design Principles
//!
//! 1. **Every Move Is Reversible**: applying a move yields a record holding
//!    exactly what it displaced. Undoing the record restores the layout
//!    bit for bit.
//!
//! 2. **One Layout, Two Faces**: the authoritative `GameState` and the
//!    observer's `GamePov` are the same generic `Solitaire<F>`. Zones,
//!    legality and structural moves are written once.
//!
//! 3. **No Leaks**: a `GamePov` is projected once and then advanced by
//!    replaying records. It only ever learns the cards a move discloses.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: piles and history are `im` vectors, so
//!   snapshots and projections are cheap clones.
//!
//! - **Deltas, Not Counters**: moves return score deltas; only `Game` and
//!   `GameView` keep a running score and move count.
//!
//! ## Modules
//!
//! - `cards`: Cards, opaque views, piles, decks
//! - `core`: Settings, layouts, errors, RNG
//! - `zones`: Stock, tableau and foundation zones with undo
//! - `rules`: Moves, move records, scoring
//! - `fen`: Canonical text encoding for every entity
//! - `game`: Game wrapper and observer view

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod fen;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Settings, TurningCards, TurningLimit,
    GameState, GamePov, Solitaire,
    GameRng,
    DeckError, FenError, MoveError, SnapshotError, StackError,
};

pub use crate::cards::{Card, CardView, Deck, Face, Rank, Suit};

pub use crate::zones::{Foundation, Stock, Tableau};

pub use crate::rules::{Move, MoveKind, MoveRecord};

pub use crate::fen::Fen;

pub use crate::game::{Game, GameView};
