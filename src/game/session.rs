//! Game session: board, counters, clock and undo history.
//!
//! `Session` is the only type that mutates a board during play. Hosts
//! (renderers, input layers) read from it and submit moves to it; every
//! call runs to completion on the caller's thread.
//!
//! ## Usage
//!
//! ```
//! use freecell_engine::core::{Location, Move, MoveResult};
//! use freecell_engine::game::Session;
//!
//! let mut session = Session::new(1);
//!
//! // Game #1: 6♠ from cascade 1 to a free cell
//! let mv = Move::single(Location::Cascade(0), Location::Reserve(0));
//! assert_eq!(session.make_move(mv), MoveResult::Success);
//! assert_eq!(session.move_count(), 1);
//!
//! // Undo restores the board; the counter keeps going
//! assert_eq!(session.undo(), MoveResult::Success);
//! assert_eq!(session.move_count(), 2);
//! ```

use im::Vector;
use tracing::{debug, instrument, trace};

use super::clock::GameClock;
use super::seed::{parse_seed, random_seed};
use crate::core::{Board, Card, Location, Move, MoveResult, RulesConfig, SeedParseError};
use crate::rules::{apply, next_autocomplete_move, validate};

/// One game in progress.
///
/// Uses an `im` vector for history so cloning a session (for snapshots
/// or speculative play) stays cheap.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    seed: u32,
    move_count: u64,
    clock: GameClock,
    history: Vector<Move>,
    config: RulesConfig,
}

impl Session {
    /// Start numbered game `seed` with default rules.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, RulesConfig::default())
    }

    /// Start numbered game `seed` with the given rules.
    #[must_use]
    #[instrument(skip(config))]
    pub fn with_config(seed: u32, config: RulesConfig) -> Self {
        debug!(seed, "dealing new game");
        Self {
            board: Board::deal(seed),
            seed,
            move_count: 0,
            clock: GameClock::new(),
            history: Vector::new(),
            config,
        }
    }

    /// Resume play from an arbitrary position.
    ///
    /// `seed` is kept for display only; the board is used as given.
    #[must_use]
    pub fn from_board(board: Board, seed: u32, config: RulesConfig) -> Self {
        Self {
            board,
            seed,
            move_count: 0,
            clock: GameClock::new(),
            history: Vector::new(),
            config,
        }
    }

    // === Game lifecycle ===

    /// Start a fresh game with a clock-derived game number. Returns the number.
    pub fn new_game(&mut self) -> u32 {
        let seed = random_seed(self.config.seed_modulus);
        self.new_game_with_seed(seed);
        seed
    }

    /// Start numbered game `seed`, clearing history, counters and clock.
    #[instrument(skip(self))]
    pub fn new_game_with_seed(&mut self, seed: u32) {
        debug!(seed, "dealing new game");
        self.board = Board::deal(seed);
        self.seed = seed;
        self.move_count = 0;
        self.clock.reset();
        self.history.clear();
    }

    /// Start the game whose number is written in `text`.
    ///
    /// On error the current game is left untouched.
    pub fn new_game_from_text(&mut self, text: &str) -> Result<u32, SeedParseError> {
        let seed = parse_seed(text)?;
        self.new_game_with_seed(seed);
        Ok(seed)
    }

    /// Advance the play clock by `dt` seconds. Stops once the game is won.
    pub fn tick(&mut self, dt: f64) {
        if !self.board.game_over() {
            self.clock.tick(dt);
        }
    }

    // === Read access ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Card at `index` within `location`; see [`Board::card_at`].
    #[must_use]
    pub fn card_at(&self, location: Location, index: usize) -> Card {
        self.board.card_at(location, index)
    }

    #[must_use]
    pub fn cascade_len(&self, index: usize) -> usize {
        self.board.cascade_len(index)
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }

    #[must_use]
    pub fn is_trivially_solved(&self) -> bool {
        self.board.is_trivially_solved()
    }

    /// Status line: move count, elapsed time and game number.
    #[must_use]
    pub fn info_line(&self) -> String {
        format!("# {}  {}  #{}", self.move_count, self.clock, self.seed)
    }

    /// Whether the card at `card_index` in `location` can be picked up.
    ///
    /// Reserves and foundations: any occupied slot. Cascades: the top card,
    /// or a deeper card when the run from it to the top is properly stacked
    /// and short enough for the current super-move capacity.
    #[must_use]
    pub fn can_move_from(&self, location: Location, card_index: usize) -> bool {
        match location {
            Location::Foundation(_) | Location::Reserve(_) => {
                self.board.card_at(location, 0).is_some()
            }
            Location::Cascade(i) => {
                let len = self.board.cascade_len(i as usize);
                if card_index >= len {
                    return false;
                }
                if card_index == len - 1 {
                    return true;
                }

                let lifted = len - card_index;
                lifted <= self.board.count_max_moves() as usize
                    && self.board.cascade(i as usize).is_stacked_properly(card_index)
            }
        }
    }

    // === Play ===

    #[must_use]
    pub fn validate_move(&self, mv: Move) -> MoveResult {
        validate(&self.board, mv)
    }

    /// Validate and, if legal, apply `mv` and record it for undo.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn make_move(&mut self, mv: Move) -> MoveResult {
        let result = validate(&self.board, mv);
        if !result.is_success() {
            trace!(%mv, %result, "move rejected");
            return result;
        }

        let cards = self.cards_lifted(mv);
        apply(&mut self.board, mv);
        self.move_count += self.config.move_increment(cards);
        self.history.push_back(mv);

        debug!(%mv, move_count = self.move_count, "move applied");
        result
    }

    /// Reverse the most recent move.
    ///
    /// The inverse is applied without validation: history only ever holds
    /// moves that were legal when made.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn undo(&mut self) -> MoveResult {
        if !self.config.undo_after_win && self.board.game_over() {
            trace!("undo refused after win");
            return MoveResult::GenericError;
        }
        let Some(last) = self.history.pop_back() else {
            trace!("nothing to undo");
            return MoveResult::GenericError;
        };

        let reverse = last.inverse();
        let cards = self.cards_lifted(reverse);
        apply(&mut self.board, reverse);
        if self.config.undo_counts_as_move {
            self.move_count += self.config.move_increment(cards);
        }

        debug!(%reverse, move_count = self.move_count, "move undone");
        MoveResult::Success
    }

    /// Play one mechanical finishing move, if the board allows it.
    ///
    /// Returns the move applied, or `None` when nothing is left to automate.
    pub fn autocomplete_step(&mut self) -> Option<Move> {
        let mv = next_autocomplete_move(&self.board)?;
        self.make_move(mv).is_success().then_some(mv)
    }

    /// Number of cards `mv` lifts off its source on the current board.
    fn cards_lifted(&self, mv: Move) -> u8 {
        let start = self.board.index_from_size(mv.from, mv.size as usize);
        self.board.count_cards_from_index(mv.from, start) as u8
    }
}
