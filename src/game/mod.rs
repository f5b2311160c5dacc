//! Game wrapper and observer view.
//!
//! `Game` owns the authoritative state, score, move count and history.
//! `GameView` is what a presentation layer holds: a point-of-view layout
//! kept in sync by replaying the game's move records.

#[allow(clippy::module_inception)]
mod game;
mod view;

pub use game::Game;
pub use view::GameView;
