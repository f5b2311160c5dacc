//! Move FEN: a kind tag followed by zero-based arguments.

use super::Fen;
use crate::core::FenError;
use crate::rules::{Move, MoveKind};

type Decoder = fn(&[usize]) -> Move;

/// Kind to decoder table. Arguments are already arity-checked.
const DECODERS: [(MoveKind, Decoder); 7] = [
    (MoveKind::HitStock, |_| Move::HitStock),
    (MoveKind::Recycle, |_| Move::Recycle),
    (MoveKind::TableauToTableau, |a| Move::TableauToTableau {
        from: a[0],
        to: a[1],
        count: a[2],
    }),
    (MoveKind::WasteToTableau, |a| Move::WasteToTableau { to: a[0] }),
    (MoveKind::WasteToFoundation, |a| Move::WasteToFoundation { to: a[0] }),
    (MoveKind::TableauToFoundation, |a| Move::TableauToFoundation { from: a[0], to: a[1] }),
    (MoveKind::FoundationToTableau, |a| Move::FoundationToTableau { from: a[0], to: a[1] }),
];

fn arguments(mv: &Move) -> Vec<usize> {
    match *mv {
        Move::HitStock | Move::Recycle => Vec::new(),
        Move::TableauToTableau { from, to, count } => vec![from, to, count],
        Move::WasteToTableau { to } | Move::WasteToFoundation { to } => vec![to],
        Move::TableauToFoundation { from, to } | Move::FoundationToTableau { from, to } => {
            vec![from, to]
        }
    }
}

impl Fen for Move {
    fn fen(&self) -> String {
        let mut tokens = vec![self.kind().tag().to_string()];
        tokens.extend(arguments(self).iter().map(usize::to_string));
        tokens.join(" ")
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        let error = || FenError::new("move", fen);
        let mut tokens = fen.split_whitespace();

        let kind = tokens.next().and_then(MoveKind::from_tag).ok_or_else(error)?;
        let args = tokens
            .map(|token| token.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| error())?;
        if args.len() != kind.arity() {
            return Err(error());
        }

        let (_, decode) = DECODERS
            .iter()
            .find(|(k, _)| *k == kind)
            .ok_or_else(error)?;
        Ok(decode(&args))
    }
}
