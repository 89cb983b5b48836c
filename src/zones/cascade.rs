//! Fixed-capacity cascade (tableau column).
//!
//! A cascade holds at most [`CASCADE_CAPACITY`] cards: seven dealt cards
//! plus a twelve-card run built down from a king. The storage is an inline
//! `SmallVec` sized to that bound, and `push` refuses to grow past it, so a
//! cascade never touches the heap.
//!
//! Index 0 is the bottom (first dealt) card; the last index is the top,
//! the only card that can be lifted on its own.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::error::DecodeError;

/// Maximum number of cards a cascade can hold.
pub const CASCADE_CAPACITY: usize = 19;

/// Inline buffer type used for cascades and lifted runs.
pub type CardRun = SmallVec<[Card; CASCADE_CAPACITY]>;

/// One tableau column.
///
/// Serialized as a bottom-to-top list of cards. Deserializing enforces
/// the same limits as [`Cascade::push`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Cascade {
    cards: CardRun,
}

impl Cascade {
    /// Create an empty cascade.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cascade from cards listed bottom to top.
    ///
    /// Panics if more than [`CASCADE_CAPACITY`] cards are given or any is
    /// [`Card::NONE`].
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut cascade = Self::new();
        for &card in cards {
            cascade.push(card);
        }
        cascade
    }

    /// Number of cards in the cascade.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at `index`, or [`Card::NONE`] outside `0..len`.
    #[must_use]
    pub fn get(&self, index: usize) -> Card {
        self.cards.get(index).copied().unwrap_or(Card::NONE)
    }

    /// The topmost card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Put a card on top. Returns the new size.
    ///
    /// Panics on overflow or when pushing [`Card::NONE`]; both mean the
    /// caller applied a move that was never validated.
    pub fn push(&mut self, card: Card) -> usize {
        assert!(card.is_some(), "Cannot push an empty card onto a cascade");
        assert!(
            self.cards.len() < CASCADE_CAPACITY,
            "Cascade overflow: already holds {} cards",
            CASCADE_CAPACITY
        );
        self.cards.push(card);
        self.cards.len()
    }

    /// Remove and return the top card, [`Card::NONE`] if empty.
    pub fn pop(&mut self) -> Card {
        self.cards.pop().unwrap_or(Card::NONE)
    }

    /// Lift the top `count` cards off, preserving their order.
    ///
    /// Takes everything if `count` exceeds the size.
    pub fn take_top(&mut self, count: usize) -> CardRun {
        let start = self.cards.len().saturating_sub(count);
        self.cards.drain(start..).collect()
    }

    /// Place a run on top, preserving its order.
    ///
    /// Panics if the result would exceed [`CASCADE_CAPACITY`].
    pub fn extend_from_slice(&mut self, run: &[Card]) {
        for &card in run {
            self.push(card);
        }
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// True iff the cards from `start` to the top form a descending run of
    /// alternating colours, each exactly one rank below the one beneath it.
    ///
    /// An empty cascade is trivially stacked; a `start` at or past the top
    /// of a non-empty cascade is not.
    #[must_use]
    pub fn is_stacked_properly(&self, start: usize) -> bool {
        if self.cards.is_empty() {
            return true;
        }
        if start >= self.cards.len() {
            return false;
        }

        self.cards[start..].windows(2).all(|pair| match (pair[0].face(), pair[1].face()) {
            (Some((lower_rank, lower_suit)), Some((rank, suit))) => {
                rank.is_one_below(lower_rank) && suit.differs_in_color(lower_suit)
            }
            _ => false,
        })
    }

    /// True iff ranks never increase from `start` to the top. Suits ignored.
    ///
    /// Same edge rules as [`Cascade::is_stacked_properly`].
    #[must_use]
    pub fn is_descending(&self, start: usize) -> bool {
        if self.cards.is_empty() {
            return true;
        }
        if start >= self.cards.len() {
            return false;
        }

        self.cards[start..]
            .windows(2)
            .all(|pair| match (pair[0].rank(), pair[1].rank()) {
                (Some(lower), Some(upper)) => upper <= lower,
                _ => false,
            })
    }
}

impl TryFrom<Vec<Card>> for Cascade {
    type Error = DecodeError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.len() > CASCADE_CAPACITY {
            return Err(DecodeError::CascadeOverflow {
                len: cards.len(),
                max: CASCADE_CAPACITY,
            });
        }
        if cards.iter().any(|card| card.is_none()) {
            return Err(DecodeError::EmptyCardInCascade);
        }
        Ok(Self {
            cards: cards.into_iter().collect(),
        })
    }
}

impl From<Cascade> for Vec<Card> {
    fn from(cascade: Cascade) -> Vec<Card> {
        cascade.cards.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_push_pop() {
        let mut cascade = Cascade::new();
        assert_eq!(cascade.push(card(Rank::King, Suit::Spades)), 1);
        assert_eq!(cascade.push(card(Rank::Queen, Suit::Hearts)), 2);

        assert_eq!(cascade.top(), Some(card(Rank::Queen, Suit::Hearts)));
        assert_eq!(cascade.pop(), card(Rank::Queen, Suit::Hearts));
        assert_eq!(cascade.pop(), card(Rank::King, Suit::Spades));
        assert_eq!(cascade.pop(), Card::NONE);
        assert!(cascade.is_empty());
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let cascade = Cascade::from_cards(&[card(Rank::Two, Suit::Clubs)]);
        assert_eq!(cascade.get(0), card(Rank::Two, Suit::Clubs));
        assert_eq!(cascade.get(1), Card::NONE);
    }

    #[test]
    fn test_fills_to_capacity() {
        let mut cascade = Cascade::new();
        for raw in 1..=CASCADE_CAPACITY as u8 {
            cascade.push(Card::from_raw(raw).unwrap());
        }
        assert_eq!(cascade.len(), CASCADE_CAPACITY);
        assert!(!cascade.cards.spilled());
    }

    #[test]
    #[should_panic(expected = "Cascade overflow")]
    fn test_overflow_panics() {
        let mut cascade = Cascade::new();
        for raw in 1..=(CASCADE_CAPACITY as u8 + 1) {
            cascade.push(Card::from_raw(raw).unwrap());
        }
    }

    #[test]
    #[should_panic(expected = "Cannot push an empty card")]
    fn test_push_none_panics() {
        Cascade::new().push(Card::NONE);
    }

    #[test]
    fn test_take_top_preserves_order() {
        let mut cascade = Cascade::from_cards(&[
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Seven, Suit::Spades),
        ]);

        let run = cascade.take_top(2);
        assert_eq!(run.as_slice(), &[card(Rank::Eight, Suit::Hearts), card(Rank::Seven, Suit::Spades)]);
        assert_eq!(cascade.cards(), &[card(Rank::Nine, Suit::Clubs)]);

        let mut other = Cascade::new();
        other.extend_from_slice(&run);
        assert_eq!(other.cards(), run.as_slice());
    }

    #[test]
    fn test_stacked_properly() {
        let cascade = Cascade::from_cards(&[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Eight, Suit::Clubs),
        ]);

        assert!(cascade.is_stacked_properly(1));
        assert!(cascade.is_stacked_properly(3));
        assert!(!cascade.is_stacked_properly(0));
        assert!(!cascade.is_stacked_properly(4));
    }

    #[test]
    fn test_stacked_properly_rejects_same_color() {
        let cascade = Cascade::from_cards(&[
            card(Rank::Four, Suit::Spades),
            card(Rank::Three, Suit::Clubs),
        ]);
        assert!(!cascade.is_stacked_properly(0));
    }

    #[test]
    fn test_empty_edge_rules() {
        let cascade = Cascade::new();
        assert!(cascade.is_stacked_properly(0));
        assert!(cascade.is_stacked_properly(5));
        assert!(cascade.is_descending(0));
    }

    #[test]
    fn test_descending_ignores_suit() {
        let cascade = Cascade::from_cards(&[
            card(Rank::King, Suit::Clubs),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Queen, Suit::Clubs),
            card(Rank::Five, Suit::Clubs),
        ]);
        assert!(cascade.is_descending(0));
        assert!(!cascade.is_stacked_properly(0));

        let rising = Cascade::from_cards(&[card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Hearts)]);
        assert!(!rising.is_descending(0));
        assert!(rising.is_descending(1));
        assert!(!rising.is_descending(2));
    }

    #[test]
    fn test_serde_round_trip() {
        let cascade = Cascade::from_cards(&[card(Rank::King, Suit::Spades), card(Rank::Queen, Suit::Hearts)]);
        let json = serde_json::to_string(&cascade).unwrap();
        assert_eq!(json, "[13,25]");
        assert_eq!(serde_json::from_str::<Cascade>(&json).unwrap(), cascade);
    }

    #[test]
    fn test_deserialize_rejects_overflow() {
        let raws: Vec<String> = (1..=20).map(|raw| raw.to_string()).collect();
        let json = format!("[{}]", raws.join(","));
        assert!(serde_json::from_str::<Cascade>(&json).is_err());

        let too_many: Vec<Card> = (1..=20).filter_map(Card::from_raw).collect();
        assert_eq!(
            Cascade::try_from(too_many),
            Err(DecodeError::CascadeOverflow { len: 20, max: CASCADE_CAPACITY })
        );
    }

    #[test]
    fn test_deserialize_rejects_empty_card() {
        assert!(serde_json::from_str::<Cascade>("[13,0]").is_err());
        assert!(serde_json::from_str::<Cascade>("[13,99]").is_err());
    }
}
