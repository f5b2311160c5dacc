//! Observer view tests.
//!
//! A view is projected once and then follows the game only through move
//! records. It must match a fresh projection at every step and never hold
//! a card identity the observer has not been shown.

use rust_klondike::cards::{CardView, Deck, Face};
use rust_klondike::core::{GamePov, GameRng, Settings, TurningCards};
use rust_klondike::game::{Game, GameView};
use rust_klondike::rules::Move;

/// Every slot that must stay opaque is opaque.
fn assert_no_leak(pov: &GamePov) {
    let stock = &pov.stock;
    let face_down = stock
        .draw_pile
        .iter()
        .chain(stock.cycled_pile.iter())
        .chain(pov.tableaus.iter().flat_map(|t| t.back.iter()));
    for slot in face_down {
        assert_eq!(slot, CardView::Hidden);
    }

    let face_up = stock
        .waste
        .iter()
        .chain(pov.tableaus.iter().flat_map(|t| t.front.iter()))
        .chain(pov.foundations.iter().flat_map(|f| f.pile.iter()));
    for slot in face_up {
        assert!(slot.known().is_some(), "face-up slot is hidden");
    }
}

/// Play `steps` pseudo-random legal moves, undoing now and then, and check
/// the view after each one.
fn play(settings: Settings, seed: u64, steps: usize) {
    let mut game = Game::new(settings, &Deck::from_seed(seed));
    let mut view = game.view();
    let mut picks: Vec<usize> = (0..steps).collect();
    GameRng::new(seed).shuffle(&mut picks);

    for pick in picks {
        if pick % 7 == 0 && game.can_undo() {
            let record = game.undo().unwrap();
            view.undo(&record).unwrap();
        } else {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[pick % moves.len()];
            let record = game.apply(mv).unwrap();
            view.apply(&record).unwrap();
        }

        assert_eq!(view, game.view());
        assert_eq!(view.pov().pile_sizes(), game.state().pile_sizes());
        assert_no_leak(view.pov());
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Test that a fresh projection hides the stock and every back card.
#[test]
fn test_fresh_projection_hides_backs_and_stock() {
    let game = Game::new(Settings::default(), &Deck::from_seed(1));
    let pov = game.pov();

    assert_no_leak(&pov);
    // 24 stock cards and 21 tableau backs
    assert_eq!(pov.hidden_count(), 45);
}

// =============================================================================
// Disclosure
// =============================================================================

/// Test that a hit discloses the turned cards and nothing else.
#[test]
fn test_hit_discloses_only_the_batch() {
    let settings = Settings::new().with_cards(TurningCards::ThreeCards);
    let mut game = Game::new(settings, &Deck::from_seed(2));
    let mut view = game.view();

    let record = game.apply(Move::HitStock).unwrap();
    view.apply(&record).unwrap();

    assert_eq!(view.pov().hidden_count(), 42);
    assert_eq!(view.pov().stock.waste, game.state().stock.waste.shown());
}

/// Test that undoing a hit turns the batch face down again.
#[test]
fn test_undone_hit_conceals_again() {
    let mut game = Game::new(Settings::default(), &Deck::from_seed(3));
    let mut view = game.view();
    let start = view.clone();

    let record = game.apply(Move::HitStock).unwrap();
    view.apply(&record).unwrap();
    let record = game.undo().unwrap();
    view.undo(&record).unwrap();

    assert_eq!(view.pov(), start.pov());
    assert_no_leak(view.pov());
}

// =============================================================================
// Sync
// =============================================================================

/// Test sync over pseudo-random draw-one games.
#[test]
fn test_view_follows_one_card_games() {
    for seed in 0..8 {
        play(Settings::default(), seed, 150);
    }
}

/// Test sync over pseudo-random draw-three games.
#[test]
fn test_view_follows_three_card_games() {
    let settings = Settings::new().with_cards(TurningCards::ThreeCards);
    for seed in 0..8 {
        play(settings, seed, 150);
    }
}

/// Test that a record from another position is refused and changes nothing.
#[test]
fn test_view_rejects_illegal_replay() {
    let game = Game::new(Settings::default(), &Deck::ordered());
    let mut view: GameView = game.view();

    // A record from another position whose move is illegal here
    let mut other = Game::new(Settings::default(), &Deck::ordered());
    for _ in 0..24 {
        other.apply(Move::HitStock).unwrap();
    }
    let recycle = other.apply(Move::Recycle).unwrap();

    assert!(view.apply(&recycle).is_err());
    assert_eq!(view, game.view());
}
