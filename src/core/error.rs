//! Error types for the fallible text and decode surfaces of the engine.
//!
//! Move legality is not an error: it is reported as a
//! [`MoveResult`](super::MoveResult) value.

use derive_more::{Display, Error};

/// Why a game number typed or pasted by the player was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SeedParseError {
    /// Input was empty or only whitespace.
    #[display("no game number given")]
    Empty,

    /// Input does not start with a decimal number.
    #[display("not a game number: {input:?}")]
    NotANumber {
        /// The rejected text.
        input: String,
    },

    /// The number does not fit in 32 bits.
    #[display("game number out of range: {input}")]
    OutOfRange {
        /// The digits that overflowed.
        input: String,
    },
}

/// Why a serialized card, cascade or rules config was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DecodeError {
    /// Card encoding outside `0..=52`.
    #[display("invalid card encoding: {raw}")]
    InvalidCard {
        /// The rejected byte.
        raw: u8,
    },

    /// More cards than a cascade can hold.
    #[display("cascade holds {len} cards, at most {max} allowed")]
    CascadeOverflow {
        /// Number of cards given.
        len: usize,
        /// Capacity of a cascade.
        max: usize,
    },

    /// A cascade listed the absent card.
    #[display("cascade contains an empty card")]
    EmptyCardInCascade,

    /// Seed modulus of zero.
    #[display("seed modulus must be positive")]
    ZeroSeedModulus,
}
