//! Mechanical finishing moves for trivially solved boards.
//!
//! Once every cascade is rank-descending, the lowest exposed card is
//! always the next one its foundation needs. Hosts call
//! [`next_autocomplete_move`] repeatedly (typically one card per animation
//! frame) until it returns `None`.

use std::cmp::Reverse;

use crate::core::{Board, Card, Location, Move, CASCADE_COUNT, RESERVE_COUNT};

/// The next card to send home, or `None` if the board is not trivially
/// solved or the game is already over.
///
/// Picks the lowest-ranked card among occupied reserves and cascade tops.
/// Ties go to the suit declared last (clubs, then diamonds, hearts,
/// spades), matching the order the finishing animation plays in.
#[must_use]
pub fn next_autocomplete_move(board: &Board) -> Option<Move> {
    if board.game_over() || !board.is_trivially_solved() {
        return None;
    }

    let reserves = (0..RESERVE_COUNT).map(|i| (Location::Reserve(i as u8), board.reserve(i)));
    let tops = (0..CASCADE_COUNT).map(|i| {
        let top = board.cascade(i).top().unwrap_or(Card::NONE);
        (Location::Cascade(i as u8), top)
    });

    let (from, card) = reserves
        .chain(tops)
        .filter_map(|(location, card)| card.face().map(|face| (location, face)))
        .min_by_key(|&(_, (rank, suit))| (rank, Reverse(suit)))?;

    let (_, suit) = card;
    Some(Move::single(from, Location::Foundation(suit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};
    use crate::rules::{apply, validate};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_none_for_unsorted_board() {
        assert_eq!(next_autocomplete_move(&Board::deal(1)), None);
    }

    #[test]
    fn test_none_when_game_over() {
        let board = Suit::ALL
            .iter()
            .fold(Board::empty(), |b, &suit| b.with_foundation(card(Rank::King, suit)));
        assert_eq!(next_autocomplete_move(&board), None);
    }

    #[test]
    fn test_picks_lowest_rank() {
        let board = Board::empty()
            .with_foundation(card(Rank::Ace, Suit::Hearts))
            .with_foundation(card(Rank::Two, Suit::Spades))
            .with_reserve(0, card(Rank::Three, Suit::Spades))
            .with_cascade(0, &[card(Rank::Three, Suit::Hearts), card(Rank::Two, Suit::Hearts)]);

        let mv = next_autocomplete_move(&board).unwrap();
        assert_eq!(mv, Move::single(Location::Cascade(0), Location::Foundation(Suit::Hearts)));
    }

    #[test]
    fn test_tie_prefers_clubs() {
        let board = Board::empty()
            .with_cascade(0, &[card(Rank::Ace, Suit::Spades)])
            .with_cascade(1, &[card(Rank::Ace, Suit::Clubs)])
            .with_reserve(2, card(Rank::Ace, Suit::Hearts));

        let mv = next_autocomplete_move(&board).unwrap();
        assert_eq!(mv.from, Location::Cascade(1));
        assert_eq!(mv.to, Location::Foundation(Suit::Clubs));
    }

    #[test]
    fn test_runs_to_completion() {
        // Each suit stacked king-to-ace in its own cascade
        let mut board = Board::empty();
        for (i, &suit) in Suit::ALL.iter().enumerate() {
            let column: Vec<_> = Rank::ALL.iter().rev().map(|&rank| card(rank, suit)).collect();
            board = board.with_cascade(i, &column);
        }

        let mut steps = 0;
        while let Some(mv) = next_autocomplete_move(&board) {
            assert!(validate(&board, mv).is_success());
            apply(&mut board, mv);
            steps += 1;
        }

        assert_eq!(steps, 52);
        assert!(board.game_over());
    }
}
