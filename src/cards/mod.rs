//! Card system: cards, piles and the deck supplier.
//!
//! ## Key Types
//!
//! - `Card`: suit and rank
//! - `CardView`: a known card or an opaque marker
//! - `Face`: abstraction over the two, used by every zone
//! - `Pile`: top/bottom-only ordered pile (`Stack`, `StackView`)
//! - `Deck`: a validated 52-card dealing order

pub mod card;
pub mod deck;
pub mod pile;

pub use card::{Card, CardView, Color, Face, Rank, Suit, DECK_SIZE, RANK_COUNT, SUIT_COUNT};
pub use deck::Deck;
pub use pile::{Batch, Pile, Stack, StackView};
