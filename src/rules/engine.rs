//! Rules engine trait.
//!
//! The rules answer three questions about a state:
//! - What moves may a player make?
//! - How does a move change the state?
//! - Is the match over, and how did it end?

use crate::core::action::Move;
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// One seat was left holding cards. `winner` is the first seat to
    /// empty its hand, if anyone did.
    Loser {
        loser: PlayerId,
        winner: Option<PlayerId>,
    },
    /// Everybody ran out of cards together.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Loser { winner: Some(w), .. } if *w == player)
    }

    #[must_use]
    pub fn is_loser(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Loser { loser, .. } if *loser == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: pure; empty when the player cannot act
/// - `apply_move`: must re-validate and leave the state untouched on error
/// - `is_terminal`: `None` while the match continues
pub trait RulesEngine {
    /// Enumerate every legal move for a player.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move>;

    /// Validate and apply a move.
    fn apply_move(&self, state: &mut GameState, mv: &Move, player: PlayerId) -> Result<()>;

    /// Check if the match is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }

    /// Is `mv` currently legal for `player`?
    fn is_legal(&self, state: &GameState, player: PlayerId, mv: &Move) -> bool {
        self.legal_moves(state, player).contains(mv)
    }
}
