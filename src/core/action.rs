//! Move representation and move outcomes.
//!
//! A move is a transfer of `size` contiguous cards from one location to
//! another. `size` is 1 for everything except cascade-to-cascade super
//! moves. The engine never interprets a move on its own: validation and
//! execution live in [`crate::rules`].

use serde::{Deserialize, Serialize};

use super::location::Location;

/// A proposed or applied transfer between two locations.
///
/// ## Example
///
/// ```
/// use freecell_engine::core::{Location, Move, Suit};
///
/// // Single card from a reserve to the spades foundation
/// let to_foundation = Move::single(Location::Reserve(0), Location::Foundation(Suit::Spades));
///
/// // Three-card super move between cascades
/// let super_move = Move::new(Location::Cascade(2), Location::Cascade(5), 3);
///
/// assert_eq!(super_move.inverse(), Move::new(Location::Cascade(5), Location::Cascade(2), 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the cards are lifted from.
    pub from: Location,

    /// Where the cards are placed.
    pub to: Location,

    /// Number of cards moved as a unit.
    pub size: u8,
}

impl Move {
    #[must_use]
    pub const fn new(from: Location, to: Location, size: u8) -> Self {
        Self { from, to, size }
    }

    /// A one-card move.
    #[must_use]
    pub const fn single(from: Location, to: Location) -> Self {
        Self::new(from, to, 1)
    }

    /// The structural inverse: source and destination swapped, same size.
    ///
    /// Applying a move and then its inverse restores the board.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.to, self.from, self.size)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} x{}", self.from, self.to, self.size)
    }
}

/// Outcome of validating or submitting a move.
///
/// A closed set of values returned by value, never raised. Everything
/// other than `Success` leaves the board untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    Success,
    /// The card does not sit exactly one rank below its target.
    WrongRank,
    /// The card does not alternate colour with its target.
    WrongSuit,
    /// The super move needs more free reserves/cascades than are available.
    InsufficientCapacity,
    /// Structurally invalid: same source and destination, zero size,
    /// more cards than present, or a never-legal pairing.
    GenericError,
}

impl MoveResult {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, MoveResult::Success)
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveResult::Success => "success",
            MoveResult::WrongRank => "wrong rank",
            MoveResult::WrongSuit => "wrong suit",
            MoveResult::InsufficientCapacity => "not enough free cells",
            MoveResult::GenericError => "illegal move",
        };
        f.write_str(text)
    }
}
