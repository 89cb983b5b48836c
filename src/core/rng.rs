//! Deterministic deal generation compatible with numbered Freecell games.
//!
//! ## Key Features
//!
//! - **Portable**: The linear-congruential generator and the shuffle pass
//!   reproduce the classic Microsoft Freecell numbering, so a game number
//!   typed by one player deals the same cards for everyone.
//! - **Explicit state**: `MsRng` is a plain value. There is no global seed.
//! - **Serializable**: O(1) state capture and restore.
//!
//! ## Usage
//!
//! ```
//! use freecell_engine::core::{shuffle, Card, Rank, Suit};
//!
//! // Game #1 starts with the jack of diamonds
//! let deck = shuffle(1);
//! assert_eq!(deck[0], Card::new(Rank::Jack, Suit::Diamonds));
//!
//! // Same seed, same deck
//! assert_eq!(shuffle(1), deck);
//! ```

use rand::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit, DECK_SIZE};

const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;
const STATE_MASK: u32 = (1 << 31) - 1;

/// Suit cycle used when building the unshuffled deck.
///
/// Differs from `Suit` declaration order; the historical generator laid
/// out each rank as clubs, diamonds, hearts, spades.
const DEAL_SUIT_ORDER: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// The Microsoft C runtime `rand()` generator.
///
/// `state = (state * 214013 + 2531011) mod 2^31`, output `state >> 16`,
/// giving values in `0..=32767`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsRng {
    state: u32,
}

impl MsRng {
    /// Create a generator seeded with a game number.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the next 15-bit value.
    pub fn next_value(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        self.state >> 16
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MsRngState {
        MsRngState { state: self.state }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MsRngState) -> Self {
        Self { state: state.state }
    }
}

impl RngCore for MsRng {
    fn next_u32(&mut self) -> u32 {
        // Two 15-bit draws plus two bits from a third fill a full word
        let high = self.next_value();
        let mid = self.next_value();
        let low = self.next_value();
        (high << 17) | (mid << 2) | (low & 0b11)
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MsRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Serializable generator state for checkpointing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsRngState {
    /// Raw 31-bit LCG state.
    pub state: u32,
}

/// Produce the 52-card deal order for a game number.
///
/// The result is dealt in order: row by row across the eight cascades.
#[must_use]
pub fn shuffle(seed: u32) -> [Card; DECK_SIZE] {
    shuffle_with(&mut MsRng::new(seed))
}

/// Shuffle using an existing generator, advancing it by 52 draws.
#[must_use]
pub fn shuffle_with(rng: &mut MsRng) -> [Card; DECK_SIZE] {
    let mut ordered = [Card::NONE; DECK_SIZE];
    let faces = Rank::ALL
        .iter()
        .flat_map(|&rank| DEAL_SUIT_ORDER.iter().map(move |&suit| Card::new(rank, suit)));
    for (slot, card) in ordered.iter_mut().zip(faces) {
        *slot = card;
    }

    let mut deck = [Card::NONE; DECK_SIZE];
    for (i, slot) in deck.iter_mut().enumerate() {
        *slot = ordered[DECK_SIZE - 1 - i];
    }

    for i in 0..DECK_SIZE {
        let j = DECK_SIZE - 1 - (rng.next_value() as usize % (DECK_SIZE - i));
        deck.swap(i, j);
    }

    deck
}
