//! Card identity: suits, ranks and the compact `Card` value.
//!
//! ## Encoding
//!
//! A card is a single byte in `0..=52`:
//! - `0` means "no card" (empty reserve, empty foundation)
//! - `1 + suit * 13 + rank` otherwise
//!
//! The byte layout keeps cards array-indexable and cheap to copy, while
//! `Suit` and `Rank` give typed access to the two halves.
//!
//! ```
//! use freecell_engine::core::{Card, Rank, Suit};
//!
//! let card = Card::new(Rank::Three, Suit::Hearts);
//! assert_eq!(card.raw(), 1 + 13 + 2);
//! assert_eq!(card.suit(), Some(Suit::Hearts));
//! assert_eq!(card.rank(), Some(Rank::Three));
//! assert!(Card::NONE.is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::error::DecodeError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Card suit, in declaration order (spades first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Zero-based suit index (spades = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit from a zero-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Suit> {
        match index {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Hearts),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Hearts and diamonds.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Spades and clubs.
    #[must_use]
    pub const fn is_black(self) -> bool {
        !self.is_red()
    }

    /// True iff one suit is red and the other black.
    #[must_use]
    pub const fn differs_in_color(self, other: Suit) -> bool {
        self.is_red() != other.is_red()
    }

    /// Single-character symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// True iff one suit is black (spades/clubs) and the other red (hearts/diamonds).
#[must_use]
pub const fn suits_differ_by_color(a: Suit, b: Suit) -> bool {
    a.differs_in_color(b)
}

/// Card rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks from ace to king.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Zero-based rank value (ace = 0, king = 12).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from a zero-based value.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Rank> {
        if value < 13 {
            Some(Rank::ALL[value as usize])
        } else {
            None
        }
    }

    /// The rank directly below this one, `None` for aces.
    #[must_use]
    pub const fn below(self) -> Option<Rank> {
        match self {
            Rank::Ace => None,
            _ => Rank::from_value(self as u8 - 1),
        }
    }

    /// True iff `self` is exactly one rank lower than `other`.
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self as u8 + 1 == other as u8
    }

    /// Short label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A playing card, or "no card".
///
/// Stored as a single byte; see the module docs for the encoding.
/// Use [`Card::face`] to get rank and suit together.
///
/// Deserializing goes through [`Card::from_raw`], so out-of-range bytes
/// are rejected.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// The absent card.
    pub const NONE: Card = Card(0);

    /// Create a card from rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self(1 + suit as u8 * 13 + rank as u8)
    }

    /// Create a card from its raw encoding.
    ///
    /// Returns `None` for values above 52. `0` yields [`Card::NONE`].
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw as usize <= DECK_SIZE {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw encoding in `0..=52`.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// Rank and suit, `None` for the absent card.
    #[must_use]
    pub const fn face(self) -> Option<(Rank, Suit)> {
        if self.0 == 0 {
            return None;
        }
        let rank = Rank::ALL[((self.0 - 1) % 13) as usize];
        let suit = Suit::ALL[((self.0 - 1) / 13) as usize];
        Some((rank, suit))
    }

    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self.face() {
            Some((_, suit)) => Some(suit),
            None => None,
        }
    }

    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self.face() {
            Some((rank, _)) => Some(rank),
            None => None,
        }
    }

    /// The same-suit card one rank lower, or [`Card::NONE`] for aces.
    ///
    /// Foundations only store their top card, so this is the card that
    /// becomes visible when the top is taken off.
    #[must_use]
    pub const fn below(self) -> Card {
        match self.face() {
            Some((Rank::Ace, _)) | None => Card::NONE,
            Some(_) => Card(self.0 - 1),
        }
    }

    /// Every real card, spades ace first.
    pub fn all() -> impl Iterator<Item = Card> {
        (1..=DECK_SIZE as u8).map(Card)
    }
}

impl TryFrom<u8> for Card {
    type Error = DecodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Card::from_raw(raw).ok_or(DecodeError::InvalidCard { raw })
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.face() {
            Some((rank, suit)) => write!(f, "{}{}", rank.label(), suit.symbol()),
            None => write!(f, "--"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_matches_layout() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).raw(), 1);
        assert_eq!(Card::new(Rank::King, Suit::Spades).raw(), 13);
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).raw(), 14);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).raw(), 52);
    }

    #[test]
    fn test_face_round_trips_every_card() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                assert_eq!(card.face(), Some((rank, suit)));
            }
        }
    }

    #[test]
    fn test_none_has_no_face() {
        assert!(Card::NONE.is_none());
        assert_eq!(Card::NONE.face(), None);
        assert_eq!(Card::default(), Card::NONE);
    }

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Card::from_raw(0), Some(Card::NONE));
        assert!(Card::from_raw(52).is_some());
        assert_eq!(Card::from_raw(53), None);
    }

    #[test]
    fn test_colors() {
        assert!(suits_differ_by_color(Suit::Spades, Suit::Hearts));
        assert!(suits_differ_by_color(Suit::Diamonds, Suit::Clubs));
        assert!(!suits_differ_by_color(Suit::Spades, Suit::Clubs));
        assert!(!suits_differ_by_color(Suit::Hearts, Suit::Diamonds));
    }

    #[test]
    fn test_below() {
        let two = Card::new(Rank::Two, Suit::Diamonds);
        assert_eq!(two.below(), Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).below(), Card::NONE);
        assert_eq!(Card::NONE.below(), Card::NONE);
    }

    #[test]
    fn test_rank_adjacency() {
        assert!(Rank::Three.is_one_below(Rank::Four));
        assert!(!Rank::Three.is_one_below(Rank::Five));
        assert!(!Rank::King.is_one_below(Rank::Ace));
        assert_eq!(Rank::Ace.below(), None);
        assert_eq!(Rank::King.below(), Some(Rank::Queen));
    }

    #[test]
    fn test_all_is_full_deck() {
        let cards: Vec<_> = Card::all().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        assert!(cards.iter().all(|c| c.is_some()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::NONE.to_string(), "--");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Card>("52").unwrap(), Card::new(Rank::King, Suit::Clubs));
        assert_eq!(serde_json::from_str::<Card>("0").unwrap(), Card::NONE);
        assert!(serde_json::from_str::<Card>("53").is_err());
        assert!(serde_json::from_str::<Card>("200").is_err());
        assert_eq!(Card::try_from(200u8), Err(DecodeError::InvalidCard { raw: 200 }));
    }
}
