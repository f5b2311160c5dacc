//! FEN: canonical text encoding.
//!
//! Every entity has a deterministic encoding that decodes back to an equal
//! value. Encodings compose positionally:
//!
//! | Entity      | Encoding                                    |
//! |-------------|---------------------------------------------|
//! | Card        | suit + rank, e.g. `d8`, `hT`                |
//! | CardView    | card token, or `??` when hidden             |
//! | Pile        | space-joined tokens, empty pile = `""`      |
//! | Tableau     | `back$front`                                |
//! | Stock       | `draw$waste$cycled`                         |
//! | Foundation  | its pile                                    |
//! | Settings    | `threecards$nolimit`                        |
//! | Solitaire   | `settings;recycles;stock;t1/../t7;f1/../f4` |
//! | Move        | `hit`, `recycle`, `tt 0 3 2`, `wf 1`, ...   |
//!
//! Decoders are strict: any malformed piece fails the whole decode with a
//! `FenError` and nothing is built.

mod moves;
mod state;

use crate::cards::{Card, CardView, Face, Pile, Rank, Suit};
use crate::core::FenError;

/// Canonical text encoding.
pub trait Fen: Sized {
    /// Encode.
    fn fen(&self) -> String;

    /// Decode, failing on any malformed input.
    fn from_fen(fen: &str) -> Result<Self, FenError>;
}

/// Split `fen` on `separator` into exactly `N` trimmed fields.
fn fields<'a, const N: usize>(fen: &'a str, separator: char, what: &'static str) -> Result<[&'a str; N], FenError> {
    let parts: Vec<&str> = fen.split(separator).map(str::trim).collect();
    parts.try_into().map_err(|_| FenError::new(what, fen))
}

impl Fen for Card {
    fn fen(&self) -> String {
        self.to_string()
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut chars = fen.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(suit), Some(rank), None) => {
                match (Suit::from_symbol(suit), Rank::from_symbol(rank)) {
                    (Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
                    _ => Err(FenError::new("card", fen)),
                }
            }
            _ => Err(FenError::new("card", fen)),
        }
    }
}

impl Fen for CardView {
    fn fen(&self) -> String {
        self.to_string()
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        if fen == CardView::HIDDEN_TOKEN {
            Ok(CardView::Hidden)
        } else {
            Card::from_fen(fen).map(CardView::Known)
        }
    }
}

impl<F: Face + Fen> Fen for Pile<F> {
    fn fen(&self) -> String {
        self.iter().map(|slot| slot.fen()).collect::<Vec<_>>().join(" ")
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        fen.split_whitespace().map(F::from_fen).collect()
    }
}
