//! Move legality.
//!
//! `validate` is a pure function of `(board, move)`. It dispatches on the
//! categories of the source and destination; the only multi-card case is
//! cascade to cascade, where the run must be properly stacked and fit the
//! free capacity of the board.

use crate::core::{Board, Card, Location, Move, MoveResult, Rank, Suit};

/// Decide whether `mv` is legal on `board`.
///
/// ```
/// use freecell_engine::core::{Board, Card, Location, Move, MoveResult, Rank, Suit};
/// use freecell_engine::rules::validate;
///
/// let board = Board::empty().with_reserve(0, Card::new(Rank::Ace, Suit::Spades));
/// let mv = Move::single(Location::Reserve(0), Location::Foundation(Suit::Spades));
/// assert_eq!(validate(&board, mv), MoveResult::Success);
/// ```
#[must_use]
pub fn validate(board: &Board, mv: Move) -> MoveResult {
    if mv.from == mv.to || mv.size == 0 || !mv.from.is_valid() || !mv.to.is_valid() {
        return MoveResult::GenericError;
    }

    match (mv.from, mv.to) {
        (Location::Cascade(src), Location::Cascade(dst)) => {
            validate_cascade_to_cascade(board, src as usize, dst as usize, mv.size as usize)
        }
        // Only cascade runs can move more than one card
        _ if mv.size != 1 => MoveResult::GenericError,
        (Location::Foundation(_), Location::Foundation(_)) => MoveResult::GenericError,
        (from, Location::Reserve(dst)) => validate_to_reserve(board, lifted_card(board, from), dst as usize),
        (from, Location::Cascade(dst)) => {
            validate_to_cascade_single(board, lifted_card(board, from), dst as usize)
        }
        (from, Location::Foundation(suit)) => {
            validate_to_foundation(board, lifted_card(board, from), suit)
        }
    }
}

/// The single card a one-card move would lift from `from`.
fn lifted_card(board: &Board, from: Location) -> Card {
    board.card_at(from, board.index_from_size(from, 1))
}

/// A card may go to its own suit's foundation when it is the next rank needed.
#[must_use]
pub fn validate_to_foundation(board: &Board, card: Card, suit: Suit) -> MoveResult {
    let Some((rank, card_suit)) = card.face() else {
        return MoveResult::GenericError;
    };
    if card_suit != suit {
        return MoveResult::GenericError;
    }

    match board.foundation(suit).rank() {
        None if rank == Rank::Ace => MoveResult::Success,
        Some(top) if top.is_one_below(rank) => MoveResult::Success,
        _ => MoveResult::GenericError,
    }
}

/// A real card may go to an empty reserve cell.
#[must_use]
pub fn validate_to_reserve(board: &Board, card: Card, index: usize) -> MoveResult {
    match board.reserves().get(index) {
        Some(slot) if slot.is_none() && card.is_some() => MoveResult::Success,
        _ => MoveResult::GenericError,
    }
}

/// A single card may go to an empty cascade, or onto a top card one rank
/// higher and of the other colour.
/// Out-of-range cascade indices give [`MoveResult::GenericError`].
#[must_use]
pub fn validate_to_cascade_single(board: &Board, card: Card, index: usize) -> MoveResult {
    if card.is_none() {
        return MoveResult::GenericError;
    }
    let Some(target) = board.cascades().get(index) else {
        return MoveResult::GenericError;
    };
    match target.top() {
        None => MoveResult::Success,
        Some(top) => continues_run(card, top),
    }
}

/// Super move between cascades.
///
/// Moving into an empty cascade halves the capacity, since the destination
/// can no longer serve as temporary storage.
/// Out-of-range cascade indices give [`MoveResult::GenericError`].
#[must_use]
pub fn validate_cascade_to_cascade(board: &Board, src: usize, dst: usize, size: usize) -> MoveResult {
    let (Some(source), Some(target)) = (board.cascades().get(src), board.cascades().get(dst)) else {
        return MoveResult::GenericError;
    };

    let mut max_moves = board.count_max_moves() as usize;
    if target.is_empty() {
        max_moves /= 2;
    }
    if size > max_moves {
        return MoveResult::InsufficientCapacity;
    }

    if size > source.len() {
        return MoveResult::GenericError;
    }

    let start = source.len() - size;
    if !source.is_stacked_properly(start) {
        return MoveResult::GenericError;
    }

    match target.top() {
        None => MoveResult::Success,
        Some(top) => continues_run(source.get(start), top),
    }
}

/// Whether `card` may sit directly on `target`. Colour is checked first.
fn continues_run(card: Card, target: Card) -> MoveResult {
    let (Some((rank, suit)), Some((target_rank, target_suit))) = (card.face(), target.face()) else {
        return MoveResult::GenericError;
    };

    if !suit.differs_in_color(target_suit) {
        MoveResult::WrongSuit
    } else if !rank.is_one_below(target_rank) {
        MoveResult::WrongRank
    } else {
        MoveResult::Success
    }
}
