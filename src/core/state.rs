//! Board state: reserves, foundations and cascades.
//!
//! ## Board
//!
//! The raw container for one Freecell position:
//! - 4 reserve cells, each holding one card or [`Card::NONE`]
//! - 4 foundations, each holding only its top card (lower ranks of the
//!   same suit are implicitly underneath)
//! - 8 cascades
//!
//! The board answers structural queries (capacity for super moves, win
//! detection) but never decides legality itself; see [`crate::rules`].
//!
//! ## Positions for hosts and tests
//!
//! `Board::deal(seed)` produces a numbered deal. Arbitrary positions are
//! built with the `with_*` methods:
//!
//! ```
//! use freecell_engine::core::{Board, Card, Rank, Suit};
//!
//! let board = Board::empty()
//!     .with_reserve(0, Card::new(Rank::Ace, Suit::Spades))
//!     .with_cascade(3, &[Card::new(Rank::Four, Suit::Spades)]);
//!
//! assert_eq!(board.empty_reserves(), 3);
//! assert_eq!(board.empty_cascades(), 7);
//! ```

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit, DECK_SIZE};
use super::location::{Location, CASCADE_COUNT, FOUNDATION_COUNT, RESERVE_COUNT};
use super::rng::shuffle;
use crate::zones::Cascade;

/// Number of full rows dealt across all eight cascades.
const FULL_DEAL_ROWS: usize = 6;

/// One Freecell position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    reserves: [Card; RESERVE_COUNT],
    foundations: [Card; FOUNDATION_COUNT],
    cascades: [Cascade; CASCADE_COUNT],
}

impl Board {
    /// A board with no cards anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal the numbered game `seed`.
    ///
    /// Six rows go round-robin across all eight cascades, then the last
    /// four cards go to cascades 1-4. Cascades 1-4 end with seven cards,
    /// 5-8 with six.
    #[must_use]
    pub fn deal(seed: u32) -> Self {
        let deck = shuffle(seed);
        let mut board = Self::empty();

        for (i, &card) in deck.iter().enumerate() {
            let column = if i < FULL_DEAL_ROWS * CASCADE_COUNT {
                i % CASCADE_COUNT
            } else {
                i - FULL_DEAL_ROWS * CASCADE_COUNT
            };
            board.cascades[column].push(card);
        }

        board
    }

    // === Builders ===

    /// Set a reserve cell. Panics on an out-of-range index.
    #[must_use]
    pub fn with_reserve(mut self, index: usize, card: Card) -> Self {
        self.reserves[index] = card;
        self
    }

    /// Set a foundation's top card. The foundation is chosen by the card's suit.
    ///
    /// Panics if `card` is [`Card::NONE`].
    #[must_use]
    pub fn with_foundation(mut self, card: Card) -> Self {
        let Some(suit) = card.suit() else {
            panic!("Foundation top must be a real card");
        };
        self.foundations[suit.index()] = card;
        self
    }

    /// Replace a cascade with `cards`, listed bottom to top.
    #[must_use]
    pub fn with_cascade(mut self, index: usize, cards: &[Card]) -> Self {
        self.cascades[index] = Cascade::from_cards(cards);
        self
    }

    // === Read access ===

    #[must_use]
    pub fn reserves(&self) -> &[Card; RESERVE_COUNT] {
        &self.reserves
    }

    /// Reserve cell contents, [`Card::NONE`] when empty or out of range.
    #[must_use]
    pub fn reserve(&self, index: usize) -> Card {
        self.reserves.get(index).copied().unwrap_or(Card::NONE)
    }

    #[must_use]
    pub fn foundations(&self) -> &[Card; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// Top card of a suit's foundation, [`Card::NONE`] if nothing placed yet.
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> Card {
        self.foundations[suit.index()]
    }

    #[must_use]
    pub fn cascades(&self) -> &[Cascade; CASCADE_COUNT] {
        &self.cascades
    }

    /// Panics on an out-of-range index.
    #[must_use]
    pub fn cascade(&self, index: usize) -> &Cascade {
        &self.cascades[index]
    }

    /// Card at `index` within `location`.
    ///
    /// Reserves and foundations ignore `index`. Returns [`Card::NONE`] for
    /// empty slots and out-of-range positions.
    #[must_use]
    pub fn card_at(&self, location: Location, index: usize) -> Card {
        match location {
            Location::Foundation(suit) => self.foundation(suit),
            Location::Reserve(i) => self.reserve(i as usize),
            Location::Cascade(i) => self
                .cascades
                .get(i as usize)
                .map_or(Card::NONE, |cascade| cascade.get(index)),
        }
    }

    /// Number of cards in a cascade, `0` for out-of-range indices.
    #[must_use]
    pub fn cascade_len(&self, index: usize) -> usize {
        self.cascades.get(index).map_or(0, Cascade::len)
    }

    /// How many cards would be lifted when picking up `location` at `index`.
    ///
    /// For cascades this is the card at `index` plus everything above it;
    /// reserves and foundations always lift one card.
    #[must_use]
    pub fn count_cards_from_index(&self, location: Location, index: usize) -> usize {
        match location {
            Location::Cascade(i) => self.cascade_len(i as usize).saturating_sub(index),
            _ => 1,
        }
    }

    /// Index of the lowest card lifted by a move of `size` cards from
    /// `location`. Always `0` for reserves and foundations.
    #[must_use]
    pub fn index_from_size(&self, location: Location, size: usize) -> usize {
        match location {
            Location::Cascade(i) => self.cascade_len(i as usize).saturating_sub(size),
            _ => 0,
        }
    }

    #[must_use]
    pub fn empty_reserves(&self) -> usize {
        self.reserves.iter().filter(|card| card.is_none()).count()
    }

    #[must_use]
    pub fn empty_cascades(&self) -> usize {
        self.cascades.iter().filter(|cascade| cascade.is_empty()).count()
    }

    /// Largest run that can be moved as a unit onto a non-empty cascade.
    ///
    /// `2^(empty cascades) * (empty reserves + 1)`: each free reserve holds
    /// one card and each empty cascade doubles what can be shuffled through.
    #[must_use]
    pub fn count_max_moves(&self) -> u32 {
        (1u32 << self.empty_cascades()) * (self.empty_reserves() as u32 + 1)
    }

    /// True iff every card has reached its foundation.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.reserves.iter().all(|card| card.is_none())
            && self.cascades.iter().all(Cascade::is_empty)
            && Suit::ALL
                .iter()
                .all(|&suit| self.foundation(suit) == Card::new(Rank::King, suit))
    }

    /// True iff the game is over or every cascade is rank-descending from
    /// its bottom card, so the rest can be played to the foundations
    /// mechanically.
    #[must_use]
    pub fn is_trivially_solved(&self) -> bool {
        self.game_over() || self.cascades.iter().all(|cascade| cascade.is_descending(0))
    }

    /// Number of cards on the foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations
            .iter()
            .filter_map(|card| card.rank())
            .map(|rank| rank.value() as usize + 1)
            .sum()
    }

    /// Number of cards still in reserves and cascades.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        (RESERVE_COUNT - self.empty_reserves())
            + self.cascades.iter().map(Cascade::len).sum::<usize>()
    }

    /// True iff no card appears twice, counting the cards implicitly under
    /// each foundation top.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; DECK_SIZE + 1];
        let mut mark = |card: Card| -> bool {
            let slot = &mut seen[card.raw() as usize];
            let fresh = !*slot;
            *slot = true;
            fresh
        };

        for &top in &self.foundations {
            let mut card = top;
            while card.is_some() {
                if !mark(card) {
                    return false;
                }
                card = card.below();
            }
        }

        self.reserves
            .iter()
            .filter(|card| card.is_some())
            .chain(self.cascades.iter().flat_map(|cascade| cascade.cards().iter()))
            .all(|&card| mark(card))
    }

    // === Mutation (executor only) ===

    pub(crate) fn set_reserve(&mut self, index: usize, card: Card) {
        self.reserves[index] = card;
    }

    pub(crate) fn set_foundation(&mut self, suit: Suit, card: Card) {
        self.foundations[suit.index()] = card;
    }

    pub(crate) fn cascade_mut(&mut self, index: usize) -> &mut Cascade {
        &mut self.cascades[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn solved_board() -> Board {
        Suit::ALL
            .iter()
            .fold(Board::empty(), |board, &suit| board.with_foundation(card(Rank::King, suit)))
    }

    #[test]
    fn test_deal_shape() {
        let board = Board::deal(1);

        for i in 0..4 {
            assert_eq!(board.cascade_len(i), 7);
        }
        for i in 4..8 {
            assert_eq!(board.cascade_len(i), 6);
        }
        assert_eq!(board.empty_reserves(), 4);
        assert!(board.foundations().iter().all(|c| c.is_none()));
        assert_eq!(board.cards_in_play(), 52);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_deal_game_one_first_cascade() {
        let board = Board::deal(1);
        // J♦ K♦ 2♠ 4♣ 3♠ 6♦ 6♠
        let raw: Vec<u8> = board.cascade(0).cards().iter().map(|c| c.raw()).collect();
        assert_eq!(raw, vec![37, 39, 2, 43, 3, 32, 6]);
    }

    #[test]
    fn test_card_at() {
        let board = Board::empty()
            .with_reserve(2, card(Rank::Five, Suit::Hearts))
            .with_foundation(card(Rank::Two, Suit::Clubs))
            .with_cascade(1, &[card(Rank::Nine, Suit::Spades), card(Rank::Eight, Suit::Hearts)]);

        assert_eq!(board.card_at(Location::Reserve(2), 0), card(Rank::Five, Suit::Hearts));
        assert_eq!(board.card_at(Location::Reserve(0), 0), Card::NONE);
        assert_eq!(board.card_at(Location::Foundation(Suit::Clubs), 7), card(Rank::Two, Suit::Clubs));
        assert_eq!(board.card_at(Location::Cascade(1), 1), card(Rank::Eight, Suit::Hearts));
        assert_eq!(board.card_at(Location::Cascade(1), 2), Card::NONE);
        assert_eq!(board.card_at(Location::Cascade(9), 0), Card::NONE);
    }

    #[test]
    fn test_count_cards_and_index_from_size() {
        let board = Board::deal(617);

        assert_eq!(board.count_cards_from_index(Location::Cascade(0), 4), 3);
        assert_eq!(board.count_cards_from_index(Location::Reserve(0), 0), 1);
        assert_eq!(board.index_from_size(Location::Cascade(5), 2), 4);
        assert_eq!(board.index_from_size(Location::Reserve(1), 1), 0);
    }

    #[test]
    fn test_count_max_moves() {
        let full = Board::deal(1);
        assert_eq!(full.count_max_moves(), 5);

        let two_cells_used = full
            .clone()
            .with_reserve(0, Card::NONE)
            .with_reserve(1, card(Rank::Ace, Suit::Spades))
            .with_reserve(2, card(Rank::Ace, Suit::Hearts));
        assert_eq!(two_cells_used.count_max_moves(), 3);

        let one_empty = full.with_cascade(7, &[]);
        assert_eq!(one_empty.count_max_moves(), 10);
    }

    #[test]
    fn test_count_max_moves_empty_board() {
        assert_eq!(Board::empty().count_max_moves(), 256 * 5);
    }

    #[test]
    fn test_game_over() {
        assert!(solved_board().game_over());
        assert!(!Board::empty().game_over());

        let with_reserve = solved_board().with_reserve(3, card(Rank::Ace, Suit::Spades));
        assert!(!with_reserve.game_over());

        let with_cascade = solved_board().with_cascade(0, &[card(Rank::Two, Suit::Hearts)]);
        assert!(!with_cascade.game_over());
    }

    #[test]
    fn test_trivially_solved() {
        assert!(solved_board().is_trivially_solved());

        let sorted = Board::empty()
            .with_cascade(0, &[card(Rank::King, Suit::Clubs), card(Rank::Two, Suit::Hearts)])
            .with_cascade(1, &[card(Rank::Ace, Suit::Spades)])
            .with_reserve(0, card(Rank::Queen, Suit::Hearts));
        assert!(sorted.is_trivially_solved());

        assert!(!Board::deal(1).is_trivially_solved());
    }

    #[test]
    fn test_foundation_and_play_counts() {
        let board = Board::empty()
            .with_foundation(card(Rank::Three, Suit::Spades))
            .with_foundation(card(Rank::Ace, Suit::Hearts))
            .with_reserve(0, card(Rank::Two, Suit::Hearts));

        assert_eq!(board.foundation_count(), 4);
        assert_eq!(board.cards_in_play(), 1);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_inconsistent_duplicate() {
        let board = Board::empty()
            .with_foundation(card(Rank::Three, Suit::Spades))
            .with_reserve(0, card(Rank::Two, Suit::Spades));
        assert!(!board.is_consistent());
    }

    #[test]
    fn test_serialization() {
        let board = Board::deal(42);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
