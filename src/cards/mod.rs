//! Card model: suits, ranks, the beat relation and deck construction.

pub mod card;
pub mod deck;

pub use card::{can_beat, Card, Rank, Suit};
pub use deck::build_deck;
