//! Rules configuration.
//!
//! Freecell implementations disagree on a few user-visible details, most
//! notably how the move counter advances. `RulesConfig` makes those choices
//! explicit. The defaults follow the most recent behaviour of the game:
//! every card moved counts, and undo counts as well.

use serde::{de, Deserialize, Deserializer, Serialize};

use super::error::DecodeError;

/// Default modulus for freshly generated game numbers.
///
/// Keeps numbers at most seven digits so they are easy to share.
pub const DEFAULT_SEED_MODULUS: u32 = 10_000_000;

/// How a successful move advances the move counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCountPolicy {
    /// Add the number of cards actually moved (super moves count each card).
    #[default]
    CardsMoved,
    /// Add one per move regardless of size.
    PerMove,
}

/// Session-level rule options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Move counter accounting.
    pub move_count_policy: MoveCountPolicy,

    /// Whether an undo also advances the move counter.
    pub undo_counts_as_move: bool,

    /// Whether undo is still accepted once the game is won.
    pub undo_after_win: bool,

    /// Fresh game numbers are drawn from `1..=seed_modulus`. Never zero.
    #[serde(deserialize_with = "positive_modulus")]
    pub seed_modulus: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            move_count_policy: MoveCountPolicy::CardsMoved,
            undo_counts_as_move: true,
            undo_after_win: true,
            seed_modulus: DEFAULT_SEED_MODULUS,
        }
    }
}

impl RulesConfig {
    /// Set the move counter accounting.
    #[must_use]
    pub fn with_move_count_policy(mut self, policy: MoveCountPolicy) -> Self {
        self.move_count_policy = policy;
        self
    }

    /// Set whether undo advances the move counter.
    #[must_use]
    pub fn with_undo_counts_as_move(mut self, counts: bool) -> Self {
        self.undo_counts_as_move = counts;
        self
    }

    /// Set whether undo is accepted after the game is won.
    #[must_use]
    pub fn with_undo_after_win(mut self, allowed: bool) -> Self {
        self.undo_after_win = allowed;
        self
    }

    /// Set the range for freshly generated game numbers.
    ///
    /// Panics if `modulus` is zero.
    #[must_use]
    pub fn with_seed_modulus(mut self, modulus: u32) -> Self {
        assert!(modulus > 0, "Seed modulus must be positive");
        self.seed_modulus = modulus;
        self
    }

    /// Counter increment for a move of `cards` cards.
    #[must_use]
    pub fn move_increment(&self, cards: u8) -> u64 {
        match self.move_count_policy {
            MoveCountPolicy::CardsMoved => u64::from(cards),
            MoveCountPolicy::PerMove => 1,
        }
    }
}

fn positive_modulus<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match u32::deserialize(deserializer)? {
        0 => Err(de::Error::custom(DecodeError::ZeroSeedModulus)),
        modulus => Ok(modulus),
    }
}
