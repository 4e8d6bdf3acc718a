//! Moves: the closed set of things a player can submit.
//!
//! Each variant carries exactly the fields that distinguish one legal move
//! from another, and equality is structural over the variant. A submitted
//! move is legal iff it compares equal to an entry of
//! [`legal_moves`](crate::games::durak::legal_moves).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// A player's move.
///
/// ```
/// use rust_durak::cards::{Card, Rank, Suit};
/// use rust_durak::core::Move;
///
/// let six = Card::new(Rank::Six, Suit::Hearts);
/// assert_eq!(Move::Attack { card: six }, Move::Attack { card: six });
/// assert_ne!(Move::Attack { card: six }, Move::CheatAttack { card: six });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// Attacker puts a card on the table.
    Attack { card: Card },

    /// Attacker puts a card whose rank is not on the table (cheat variant).
    CheatAttack { card: Card },

    /// Defender covers the pair whose attack card is `attack` with `card`.
    Defend { attack: Card, card: Card },

    /// Defender picks up every table card.
    Take,

    /// Attacker closes a fully beaten exchange.
    EndTurn,

    /// Defender adds a same-rank card and passes the defense on.
    Translate { card: Card },

    /// Any player claims that `against` put `card` on the table illegally
    /// (cheat variant).
    Accuse { against: PlayerId, card: Card },
}

impl Move {
    /// Short name of the move kind, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Move::Attack { .. } => "attack",
            Move::CheatAttack { .. } => "cheat_attack",
            Move::Defend { .. } => "defend",
            Move::Take => "take",
            Move::EndTurn => "end_turn",
            Move::Translate { .. } => "translate",
            Move::Accuse { .. } => "accuse",
        }
    }

    /// Is this move only available in the cheat variant?
    #[must_use]
    pub fn requires_trick(&self) -> bool {
        matches!(self, Move::CheatAttack { .. } | Move::Accuse { .. })
    }

    /// Does this move close the current exchange?
    #[must_use]
    pub fn closes_exchange(&self) -> bool {
        matches!(self, Move::Take | Move::EndTurn)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Attack { card } | Move::CheatAttack { card } | Move::Translate { card } => {
                write!(f, "{} {}", self.kind(), card)
            }
            Move::Defend { attack, card } => write!(f, "defend {} with {}", attack, card),
            Move::Take | Move::EndTurn => f.write_str(self.kind()),
            Move::Accuse { against, card } => write!(f, "accuse {} of {}", against, card),
        }
    }
}

/// A recorded move with its position in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,

    /// The move applied.
    pub mv: Move,

    /// Number of exchanges resolved before this move.
    pub exchange: u32,

    /// Global sequence number (0-based, one per applied move).
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_move_equality_is_structural() {
        let a = Move::Defend {
            attack: card(Rank::Six, Suit::Clubs),
            card: card(Rank::Seven, Suit::Clubs),
        };
        let b = Move::Defend {
            attack: card(Rank::Six, Suit::Clubs),
            card: card(Rank::Seven, Suit::Clubs),
        };
        let c = Move::Defend {
            attack: card(Rank::Six, Suit::Clubs),
            card: card(Rank::Eight, Suit::Clubs),
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Move::Take, Move::EndTurn);
    }

    #[test]
    fn test_requires_trick() {
        let six = card(Rank::Six, Suit::Hearts);
        assert!(Move::CheatAttack { card: six }.requires_trick());
        assert!(Move::Accuse { against: PlayerId::new(1), card: six }.requires_trick());
        assert!(!Move::Attack { card: six }.requires_trick());
        assert!(!Move::Take.requires_trick());
    }

    #[test]
    fn test_closes_exchange() {
        assert!(Move::Take.closes_exchange());
        assert!(Move::EndTurn.closes_exchange());
        assert!(!Move::Translate { card: card(Rank::Ace, Suit::Spades) }.closes_exchange());
    }

    #[test]
    fn test_display() {
        let m = Move::Defend {
            attack: card(Rank::Six, Suit::Clubs),
            card: card(Rank::Ace, Suit::Clubs),
        };
        assert_eq!(m.to_string(), "defend 6♣ with A♣");
        assert_eq!(Move::Take.to_string(), "take");
    }

    #[test]
    fn test_move_json_names_the_kind() {
        let m = Move::Attack { card: card(Rank::Nine, Suit::Spades) };
        let json = serde_json::to_value(m).unwrap();
        assert!(json.get("attack").is_some());

        let back: Move = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);

        let take: Move = serde_json::from_str(r#""take""#).unwrap();
        assert_eq!(take, Move::Take);
    }
}
