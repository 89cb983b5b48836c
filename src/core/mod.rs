//! Core engine types: cards, locations, moves, the deal generator,
//! configuration and board state.
//!
//! Everything here is a plain value with no knowledge of legality.
//! Rules live in [`crate::rules`], the session wrapper in [`crate::game`].

pub mod card;
pub mod location;
pub mod action;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use card::{suits_differ_by_color, Card, Rank, Suit, DECK_SIZE};
pub use location::{
    Location, LocationKind, CASCADE_COUNT, FOUNDATION_COUNT, LOCATION_COUNT, RESERVE_COUNT,
};
pub use action::{Move, MoveResult};
pub use rng::{shuffle, shuffle_with, MsRng, MsRngState};
pub use config::{MoveCountPolicy, RulesConfig, DEFAULT_SEED_MODULUS};
pub use error::{DecodeError, SeedParseError};
pub use state::Board;
