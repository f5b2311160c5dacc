//! FEN for zones, settings and whole layouts.

use super::{fields, Fen};
use crate::cards::{Face, Pile};
use crate::core::{FenError, Settings, Solitaire, TurningCards, TurningLimit, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::zones::{Foundation, Stock, Tableau};

const ZONE_SEPARATOR: char = '$';
const PILE_LIST_SEPARATOR: char = '/';
const FIELD_SEPARATOR: char = ';';

impl<F: Face + Fen> Fen for Tableau<F> {
    fn fen(&self) -> String {
        format!("{}{ZONE_SEPARATOR}{}", self.back.fen(), self.front.fen())
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        let [back, front] = fields::<2>(fen, ZONE_SEPARATOR, "tableau")?;
        let (back, front) = (Pile::from_fen(back)?, Pile::from_fen(front)?);
        // A back card is flipped as soon as the front empties
        if front.is_empty() && !back.is_empty() {
            return Err(FenError::new("tableau", fen));
        }
        Ok(Tableau::new(back, front))
    }
}

impl<F: Face + Fen> Fen for Stock<F> {
    fn fen(&self) -> String {
        format!(
            "{}{ZONE_SEPARATOR}{}{ZONE_SEPARATOR}{}",
            self.draw_pile.fen(),
            self.waste.fen(),
            self.cycled_pile.fen()
        )
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        let [draw_pile, waste, cycled_pile] = fields::<3>(fen, ZONE_SEPARATOR, "stock")?;
        Ok(Stock {
            draw_pile: Pile::from_fen(draw_pile)?,
            waste: Pile::from_fen(waste)?,
            cycled_pile: Pile::from_fen(cycled_pile)?,
        })
    }
}

impl<F: Face + Fen> Fen for Foundation<F> {
    fn fen(&self) -> String {
        self.pile.fen()
    }

    /// Rejects piles that are not an ascending single-suit run from the Ace.
    fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut foundation = Foundation::default();
        for slot in Pile::<F>::from_fen(fen)?.iter() {
            match slot.known() {
                Some(card) if foundation.accepts(card) => foundation.accept(slot),
                _ => return Err(FenError::new("foundation", fen)),
            }
        }
        Ok(foundation)
    }
}

impl Fen for Settings {
    fn fen(&self) -> String {
        format!("{}{ZONE_SEPARATOR}{}", self.cards.tag(), self.limit.tag())
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        let [cards, limit] = fields::<2>(fen, ZONE_SEPARATOR, "settings")?;
        match (TurningCards::from_tag(cards), TurningLimit::from_tag(limit)) {
            (Some(cards), Some(limit)) => Ok(Settings { cards, limit }),
            _ => Err(FenError::new("settings", fen)),
        }
    }
}

fn join<T: Fen>(items: &[T]) -> String {
    items
        .iter()
        .map(Fen::fen)
        .collect::<Vec<_>>()
        .join(&PILE_LIST_SEPARATOR.to_string())
}

fn split<T: Fen, const N: usize>(fen: &str, what: &'static str) -> Result<[T; N], FenError> {
    let parsed = fields::<N>(fen, PILE_LIST_SEPARATOR, what)?
        .into_iter()
        .map(T::from_fen)
        .collect::<Result<Vec<_>, _>>()?;
    parsed.try_into().map_err(|_| FenError::new(what, fen))
}

/// Top-level fields are joined with `;` rather than spaces, since pile
/// encodings are themselves space-separated.
///
/// Decoding only accepts layouts that pass `Solitaire::is_well_formed`.
impl<F: Face + Fen> Fen for Solitaire<F> {
    fn fen(&self) -> String {
        [
            self.settings.fen(),
            self.recycle_count.to_string(),
            self.stock.fen(),
            join(&self.tableaus),
            join(&self.foundations),
        ]
        .join(&FIELD_SEPARATOR.to_string())
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        let [settings, recycle_count, stock, tableaus, foundations] =
            fields::<5>(fen, FIELD_SEPARATOR, "game")?;

        let layout = Solitaire {
            settings: Settings::from_fen(settings)?,
            recycle_count: recycle_count
                .parse()
                .map_err(|_| FenError::new("recycle count", recycle_count))?,
            stock: Stock::from_fen(stock)?,
            tableaus: split::<_, TABLEAU_COUNT>(tableaus, "tableau list")?,
            foundations: split::<_, FOUNDATION_COUNT>(foundations, "foundation list")?,
        };
        if !layout.is_well_formed() {
            return Err(FenError::new("game", fen));
        }
        Ok(layout)
    }
}
