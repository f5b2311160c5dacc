//! Card identity: suits, ranks, and the opaque-aware `CardView`.
//!
//! A `Card` is the authoritative value. A `CardView` is what a restricted
//! observer holds for the same slot: either the known card or an opaque
//! marker. Both implement `Face`, which lets piles, zones and the whole
//! game state be written once and instantiated for either view.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of suits in the deck.
pub const SUIT_COUNT: usize = 4;
/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;
/// Number of cards in the deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Card suit. Declaration order is the canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Suit color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter FEN symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Parse a FEN suit symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.symbol() == symbol)
    }
}

/// Card color, used by the tableau alternation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank. Discriminants are the face values (Ace = 1, King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value in 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from a face value in 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// The rank directly above, `None` for King.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// Single-character FEN symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    /// Parse a FEN rank symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use rust_klondike::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Diamonds, Rank::Eight);
/// assert_eq!(card.to_string(), "d8");
/// assert!(card.stacks_on(Card::new(Suit::Spades, Rank::Nine)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Card color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Whether this card may be placed on `below` in a tableau column:
    /// opposite color, exactly one rank lower.
    #[must_use]
    pub fn stacks_on(self, below: Card) -> bool {
        self.color() != below.color() && self.rank.next() == Some(below.rank)
    }

    /// Every card in canonical order: suit by suit, Ace to King.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.symbol())
    }
}

/// A slot as seen by a restricted observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardView {
    /// Face-up card.
    Known(Card),
    /// Face-down or undealt card.
    Hidden,
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardView::Known(card) => card.fmt(f),
            CardView::Hidden => f.write_str(CardView::HIDDEN_TOKEN),
        }
    }
}

impl CardView {
    /// FEN token for an opaque slot.
    pub const HIDDEN_TOKEN: &'static str = "??";
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        CardView::Known(card)
    }
}

/// Pile element: an authoritative `Card` or an observer's `CardView`.
///
/// Zones move `Face` values around without knowing which view they hold.
/// The three constructors decide what a card becomes when it lands in a
/// pile: `shown` for face-up piles, `concealed` for face-down ones.
pub trait Face: Copy + Eq + fmt::Debug + fmt::Display {
    /// The card identity, if this slot discloses it.
    fn known(self) -> Option<Card>;

    /// A face-up slot holding `card`.
    fn shown(card: Card) -> Self;

    /// A face-down slot holding `card`.
    fn concealed(card: Card) -> Self;

    /// This slot turned face down.
    #[must_use]
    fn conceal(self) -> Self;
}

impl Face for Card {
    fn known(self) -> Option<Card> {
        Some(self)
    }

    fn shown(card: Card) -> Self {
        card
    }

    fn concealed(card: Card) -> Self {
        card
    }

    fn conceal(self) -> Self {
        self
    }
}

impl Face for CardView {
    fn known(self) -> Option<Card> {
        match self {
            CardView::Known(card) => Some(card),
            CardView::Hidden => None,
        }
    }

    fn shown(card: Card) -> Self {
        CardView::Known(card)
    }

    fn concealed(_card: Card) -> Self {
        CardView::Hidden
    }

    fn conceal(self) -> Self {
        CardView::Hidden
    }
}
