//! Deck construction.

use im::Vector;

use super::card::{Card, Suit};
use crate::core::DeckSize;

/// Build the ordered, unshuffled deck for `size`.
///
/// Cards are grouped by suit (`Suit::ALL` order), ranks ascending within a
/// suit, so the last card is the Ace of Spades.
///
/// ```
/// use rust_durak::cards::{build_deck, Card, Rank, Suit};
/// use rust_durak::core::DeckSize;
///
/// let deck = build_deck(DeckSize::Short24);
/// assert_eq!(deck.len(), 24);
/// assert_eq!(deck.front(), Some(&Card::new(Rank::Nine, Suit::Clubs)));
/// assert_eq!(deck.back(), Some(&Card::new(Rank::Ace, Suit::Spades)));
/// ```
#[must_use]
pub fn build_deck(size: DeckSize) -> Vector<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| size.ranks().iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}
