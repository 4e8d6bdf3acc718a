//! Engine errors.
//!
//! `IllegalMove` and `ModeDisabled` are client-correctable: refresh the legal
//! move list and prompt again. `CardMissing` and `PlayerNotFound` mean the
//! caller bypassed validation. Every failing call leaves the state untouched.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DurakError {
    /// The move is not in the player's current legal set.
    #[error("illegal move")]
    IllegalMove,

    /// A cheat-variant move was submitted while the variant is off.
    #[error("move requires the cheating variant")]
    ModeDisabled,

    /// A referenced card is not actually held.
    #[error("{player} does not hold {card}")]
    CardMissing { player: PlayerId, card: Card },

    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("unsupported player count {0}, expected 2 to 6")]
    PlayerCount(usize),

    #[error("a {deck}-card deck cannot deal {players} hands")]
    DeckTooSmall { players: usize, deck: usize },

    #[error("duplicate player id: {0}")]
    DuplicatePlayer(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T, E = DurakError> = std::result::Result<T, E>;
