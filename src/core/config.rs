//! Game settings.
//!
//! Settings are fixed when a game is dealt:
//! - `TurningCards`: how many cards a stock hit turns over
//! - `TurningLimit`: how many times the waste may be recycled
//!
//! Settings are plain serde types. Loading them from a file or a UI is the
//! caller's business; the engine only reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cards turned over per stock hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurningCards {
    #[default]
    OneCard,
    ThreeCards,
}

impl TurningCards {
    /// Number of cards per hit.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            TurningCards::OneCard => 1,
            TurningCards::ThreeCards => 3,
        }
    }

    /// FEN tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            TurningCards::OneCard => "onecard",
            TurningCards::ThreeCards => "threecards",
        }
    }

    /// Parse a FEN tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        [TurningCards::OneCard, TurningCards::ThreeCards]
            .into_iter()
            .find(|t| t.tag() == tag)
    }
}

/// Number of recycles allowed per game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurningLimit {
    #[default]
    NoLimit,
    OnePass,
    ThreePass,
}

impl TurningLimit {
    /// Maximum number of recycles, `None` if unlimited.
    #[must_use]
    pub const fn max_recycles(self) -> Option<u32> {
        match self {
            TurningLimit::NoLimit => None,
            TurningLimit::OnePass => Some(1),
            TurningLimit::ThreePass => Some(3),
        }
    }

    /// Whether another recycle is allowed after `recycle_count` of them.
    #[must_use]
    pub fn allows(self, recycle_count: u32) -> bool {
        self.max_recycles().map_or(true, |max| recycle_count < max)
    }

    /// FEN tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            TurningLimit::NoLimit => "nolimit",
            TurningLimit::OnePass => "onepass",
            TurningLimit::ThreePass => "threepass",
        }
    }

    /// Parse a FEN tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        [TurningLimit::NoLimit, TurningLimit::OnePass, TurningLimit::ThreePass]
            .into_iter()
            .find(|t| t.tag() == tag)
    }
}

/// Settings for one game.
///
/// ## Example
///
/// ```
/// use rust_klondike::core::{Settings, TurningCards, TurningLimit};
///
/// let settings = Settings::new()
///     .with_cards(TurningCards::ThreeCards)
///     .with_limit(TurningLimit::ThreePass);
///
/// assert_eq!(settings.draw_count(), 3);
/// assert!(settings.allows_recycle(2));
/// assert!(!settings.allows_recycle(3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settings {
    /// Cards turned per hit.
    pub cards: TurningCards,
    /// Recycle limit.
    pub limit: TurningLimit,
}

impl Settings {
    /// Default settings: one card, unlimited recycles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards turned per hit.
    #[must_use]
    pub fn with_cards(mut self, cards: TurningCards) -> Self {
        self.cards = cards;
        self
    }

    /// Set the recycle limit.
    #[must_use]
    pub fn with_limit(mut self, limit: TurningLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Cards turned per hit.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.cards.count()
    }

    /// Whether another recycle is allowed after `recycle_count` of them.
    #[must_use]
    pub fn allows_recycle(&self, recycle_count: u32) -> bool {
        self.limit.allows(recycle_count)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cards, {}", self.draw_count(), self.limit.tag())
    }
}
