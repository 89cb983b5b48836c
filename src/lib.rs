//! # freecell-engine
//!
//! Rules engine for Freecell solitaire, with numbered deals compatible
//! with the classic Microsoft game numbers.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: Legality checks never mutate; execution never checks.
//!    [`Session`] is the one place the two are combined.
//!
//! 2. **Deterministic deals**: Game `n` always deals the same 52 cards, on
//!    every platform, from a bit-exact reimplementation of the Microsoft C
//!    runtime's linear congruential generator.
//!
//! 3. **Host-agnostic**: No rendering, input or timers. Hosts read the
//!    board, submit [`Move`]s and drive the clock with `tick`.
//!
//! ## Modules
//!
//! - `core`: Cards, locations, moves, deal generator, configuration, board
//! - `zones`: Cascade container
//! - `rules`: Move validation, execution and autocomplete
//! - `game`: Session (undo, move counter, clock) and game numbers

pub mod core;
pub mod zones;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Card, Rank, Suit,
    Location, LocationKind,
    Move, MoveResult,
    MsRng, MsRngState, shuffle,
    MoveCountPolicy, RulesConfig,
    SeedParseError,
};

pub use crate::zones::Cascade;

pub use crate::rules::{apply, next_autocomplete_move, validate};

pub use crate::game::{parse_seed, GameClock, Session};
