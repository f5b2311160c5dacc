//! Core engine types: settings, state, RNG, errors.
//!
//! This module holds the layout types shared by the authoritative game and
//! the observer's view, plus the ambient pieces (configuration, errors,
//! deterministic randomness) the rest of the crate builds on.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{Settings, TurningCards, TurningLimit};
pub use error::{DeckError, FenError, MoveError, SnapshotError, StackError};
pub use rng::GameRng;
pub use state::{GamePov, GameState, Solitaire, FOUNDATION_COUNT, TABLEAU_COUNT};
