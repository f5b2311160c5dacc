//! Klondike rules: moves, move records and scoring.
//!
//! - `Move`: player action input, legality and application
//! - `MoveRecord`: what a performed move displaced, and how to undo it
//! - `score`: fixed score deltas per move kind and for undo
//!
//! The rules never mutate a score or a move counter themselves; they hand
//! back deltas for the game wrapper to add.

pub mod moves;
pub mod record;
pub mod score;

pub use moves::{Move, MoveKind};
pub use record::MoveRecord;
