//! Score deltas.
//!
//! Moves return their delta as a plain value; only the game wrapper and
//! the game view add it to a running score.

/// Turning cards from the draw pile.
pub const HIT_STOCK: i32 = 0;

/// Recycling the waste.
pub const RECYCLE: i32 = -10;

/// Tableau-to-tableau move that turns a back card face up.
pub const TABLEAU_FLIP: i32 = 10;

pub const WASTE_TO_TABLEAU: i32 = 10;

pub const WASTE_TO_FOUNDATION: i32 = 30;

pub const TABLEAU_TO_FOUNDATION: i32 = 20;

pub const FOUNDATION_TO_TABLEAU: i32 = -30;

/// Any undo, whatever the move undone.
pub const UNDO: i32 = -80;
