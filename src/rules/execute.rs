//! Move execution.
//!
//! `apply` mutates a board for a move that has already passed
//! [`validate`](super::validate). It does not check legality again and
//! has no failure path: an unvalidated move leaves the board in an
//! unspecified state, and overfilling a cascade panics.

use crate::core::{Board, Card, Location, Move};

/// Apply a pre-validated move.
///
/// ```
/// use freecell_engine::core::{Board, Card, Location, Move, Rank, Suit};
/// use freecell_engine::rules::{apply, validate};
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let mut board = Board::empty().with_reserve(0, ace);
/// let mv = Move::single(Location::Reserve(0), Location::Foundation(Suit::Spades));
///
/// assert!(validate(&board, mv).is_success());
/// apply(&mut board, mv);
/// assert_eq!(board.foundation(Suit::Spades), ace);
/// assert!(board.reserve(0).is_none());
/// ```
pub fn apply(board: &mut Board, mv: Move) {
    match (mv.from, mv.to) {
        (Location::Cascade(src), Location::Cascade(dst)) => {
            let run = board.cascade_mut(src as usize).take_top(mv.size as usize);
            board.cascade_mut(dst as usize).extend_from_slice(&run);
        }
        (Location::Foundation(_), Location::Foundation(_)) => {}
        (from, to) => {
            let card = take_card(board, from);
            place_card(board, to, card);
        }
    }
}

/// Remove the single liftable card at `from`.
fn take_card(board: &mut Board, from: Location) -> Card {
    match from {
        Location::Cascade(i) => board.cascade_mut(i as usize).pop(),
        Location::Reserve(i) => {
            let card = board.reserve(i as usize);
            board.set_reserve(i as usize, Card::NONE);
            card
        }
        Location::Foundation(suit) => {
            // Uncover the card beneath the top
            let card = board.foundation(suit);
            board.set_foundation(suit, card.below());
            card
        }
    }
}

/// Put a single card at `to`. Foundations are keyed by the card's own suit.
fn place_card(board: &mut Board, to: Location, card: Card) {
    match to {
        Location::Cascade(i) => {
            board.cascade_mut(i as usize).push(card);
        }
        Location::Reserve(i) => board.set_reserve(i as usize, card),
        Location::Foundation(slot) => board.set_foundation(card.suit().unwrap_or(slot), card),
    }
}
