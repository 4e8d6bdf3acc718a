//! Playing cards: suits, ranks and the beat relation.
//!
//! Cards are plain `Copy` values. A card's identity is its `(rank, suit)`
//! pair; every configured deck holds each pair at most once, so a card
//! value also identifies a physical card for the whole deal.

use serde::{Deserialize, Serialize};

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        };
        f.write_str(symbol)
    }
}

/// Card rank, ordered from lowest to highest.
///
/// Which ranks take part in a deal depends on the configured deck size;
/// see [`DeckSize::ranks`](crate::core::DeckSize::ranks).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
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
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
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
        Rank::Ace,
    ];
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
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
            Rank::Ace => "A",
        };
        f.write_str(label)
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Does this card belong to the trump suit?
    #[must_use]
    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Can `defense` beat `attack` when `trump` is the trump suit?
///
/// A card beats another of the same suit with a strictly higher rank, and a
/// trump beats any non-trump regardless of rank.
///
/// ```
/// use rust_durak::cards::{can_beat, Card, Rank, Suit};
///
/// let attack = Card::new(Rank::Ace, Suit::Hearts);
/// assert!(can_beat(attack, Card::new(Rank::Six, Suit::Spades), Suit::Spades));
/// assert!(!can_beat(attack, Card::new(Rank::King, Suit::Hearts), Suit::Spades));
/// ```
#[must_use]
pub fn can_beat(attack: Card, defense: Card, trump: Suit) -> bool {
    if defense.suit == attack.suit {
        return defense.rank > attack.rank;
    }
    defense.suit == trump && attack.suit != trump
}

/// Ordering key for offering attacks: non-trumps first, then by rank.
pub(crate) fn attack_order_key(card: Card, trump: Suit) -> (bool, Rank, Suit) {
    (card.is_trump(trump), card.rank, card.suit)
}
