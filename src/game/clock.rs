//! Elapsed play time.

use serde::{Deserialize, Serialize};

/// Seconds spent on the current game.
///
/// The host advances it once per frame with [`GameClock::tick`]; the
/// session stops ticking once the game is won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    seconds: f64,
}

impl GameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds. Negative or non-finite deltas are ignored.
    pub fn tick(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.seconds += dt;
        }
    }

    pub fn reset(&mut self) {
        self.seconds = 0.0;
    }

    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Whole hours, minutes and seconds.
    #[must_use]
    pub fn hms(&self) -> (u64, u64, u64) {
        let total = self.seconds as u64;
        (total / 3600, (total % 3600) / 60, total % 60)
    }
}

impl std::fmt::Display for GameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hours, minutes, seconds) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
