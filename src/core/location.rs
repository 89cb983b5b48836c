//! Board locations: the 16 slots a move can start from or end at.
//!
//! ## Slot Numbering
//!
//! Hosts that need a flat index (hit-testing tables, saved layouts) use the
//! historical 0..16 numbering:
//! - `0..8`: cascades 1-8
//! - `8..12`: reserves 1-4
//! - `12..16`: foundations, spades/hearts/diamonds/clubs
//!
//! ```
//! use freecell_engine::core::{Location, Suit};
//!
//! assert_eq!(Location::Cascade(0).index(), 0);
//! assert_eq!(Location::Reserve(3).index(), 11);
//! assert_eq!(Location::from_index(13), Some(Location::Foundation(Suit::Hearts)));
//! assert_eq!(Location::all().count(), 16);
//! ```

use serde::{Deserialize, Serialize};

use super::card::Suit;

/// Number of cascades (tableau columns).
pub const CASCADE_COUNT: usize = 8;

/// Number of reserve cells.
pub const RESERVE_COUNT: usize = 4;

/// Number of foundations, one per suit.
pub const FOUNDATION_COUNT: usize = 4;

/// Total number of addressable slots.
pub const LOCATION_COUNT: usize = CASCADE_COUNT + RESERVE_COUNT + FOUNDATION_COUNT;

/// A slot on the board.
///
/// Cascade and reserve indices are zero-based. Indices outside
/// `0..CASCADE_COUNT` / `0..RESERVE_COUNT` are representable but never
/// valid; [`Location::is_valid`] checks this and move validation rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Cascade(u8),
    Reserve(u8),
    Foundation(Suit),
}

/// Location category, used when dispatching on (from, to) pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Cascade,
    Reserve,
    Foundation,
}

impl Location {
    #[must_use]
    pub const fn kind(self) -> LocationKind {
        match self {
            Location::Cascade(_) => LocationKind::Cascade,
            Location::Reserve(_) => LocationKind::Reserve,
            Location::Foundation(_) => LocationKind::Foundation,
        }
    }

    #[must_use]
    pub const fn is_cascade(self) -> bool {
        matches!(self, Location::Cascade(_))
    }

    #[must_use]
    pub const fn is_reserve(self) -> bool {
        matches!(self, Location::Reserve(_))
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, Location::Foundation(_))
    }

    /// True iff the slot index is in range for its category.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Location::Cascade(i) => (i as usize) < CASCADE_COUNT,
            Location::Reserve(i) => (i as usize) < RESERVE_COUNT,
            Location::Foundation(_) => true,
        }
    }

    /// Flat slot index in `0..LOCATION_COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Location::Cascade(i) => i as usize,
            Location::Reserve(i) => CASCADE_COUNT + i as usize,
            Location::Foundation(suit) => CASCADE_COUNT + RESERVE_COUNT + suit.index(),
        }
    }

    /// Location from a flat slot index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Location> {
        if index < CASCADE_COUNT {
            Some(Location::Cascade(index as u8))
        } else if index < CASCADE_COUNT + RESERVE_COUNT {
            Some(Location::Reserve((index - CASCADE_COUNT) as u8))
        } else {
            match Suit::from_index(index - CASCADE_COUNT - RESERVE_COUNT) {
                Some(suit) => Some(Location::Foundation(suit)),
                None => None,
            }
        }
    }

    /// All 16 slots in flat-index order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..LOCATION_COUNT).filter_map(Location::from_index)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Cascade(i) => write!(f, "Cascade({})", u16::from(*i) + 1),
            Location::Reserve(i) => write!(f, "Reserve({})", u16::from(*i) + 1),
            Location::Foundation(suit) => write!(f, "Foundation({})", suit.symbol()),
        }
    }
}
