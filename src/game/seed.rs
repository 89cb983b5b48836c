//! Game numbers: generating fresh ones and reading typed or pasted ones.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::core::SeedParseError;

/// A fresh game number in `1..=modulus`, drawn from the wall clock.
///
/// Panics if `modulus` is zero.
#[must_use]
pub fn random_seed(modulus: u32) -> u32 {
    assert!(modulus > 0, "Seed modulus must be positive");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    seed_from_entropy(nanos, modulus)
}

/// Reduce raw entropy to a game number in `1..=modulus`.
#[must_use]
pub fn seed_from_entropy(entropy: u128, modulus: u32) -> u32 {
    (entropy % u128::from(modulus)) as u32 + 1
}

/// Read a game number from text such as clipboard contents.
///
/// Leading whitespace and a leading `+` are accepted, and anything after
/// the digits is ignored (`"617\n"` and `"617 (hard)"` both give 617).
/// Text that does not start with digits is rejected.
///
/// ```
/// use freecell_engine::game::parse_seed;
///
/// assert_eq!(parse_seed("  11982\n"), Ok(11982));
/// assert!(parse_seed("deal me in").is_err());
/// ```
pub fn parse_seed(text: &str) -> Result<u32, SeedParseError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(SeedParseError::Empty);
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_len];

    if digits.is_empty() {
        warn!(input = %text, "rejected game number");
        return Err(SeedParseError::NotANumber {
            input: text.to_string(),
        });
    }

    digits.parse::<u32>().map_err(|_| {
        warn!(input = %text, "game number out of range");
        SeedParseError::OutOfRange {
            input: digits.to_string(),
        }
    })
}
