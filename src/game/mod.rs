//! Playing a game: the session, its clock and game numbers.

pub mod clock;
pub mod seed;
pub mod session;

pub use clock::GameClock;
pub use seed::{parse_seed, random_seed, seed_from_entropy};
pub use session::Session;
