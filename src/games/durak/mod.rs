//! Durak: attack, defend, take, translate.
//!
//! Rules implemented here:
//! - 2-6 seats, 24/36/52-card decks, six-card hands, last deck card is trump
//! - The holder of the lowest trump attacks first; the defender is the next seat clockwise
//! - Attacks must match a rank already on the table, up to
//!   `min(max_on_table, defender's hand at exchange start)` pairs
//!   (five before the first beat with `limit_five_before_beat`)
//! - The defender beats each attack or takes the whole table; with
//!   `allow_translation` a same-rank card passes the attack to the next seat
//! - After each exchange hands are refilled (attacker first, defender last),
//!   and once the deck is gone the last seat holding cards loses
//! - With `with_trick`, rank-violating attacks may be played and accused
//!
//! Callers query [`legal_moves`] and submit one of its entries through
//! [`apply_move`], which re-validates before mutating.

mod apply;
mod cheat;
mod deal;
mod endgame;
mod exchange;
mod legal;

pub use apply::apply_move;
pub use deal::init_game;
pub use legal::{is_translation_available, legal_moves};

use crate::core::{GameState, Move, PlayerId, Result};
use crate::rules::RulesEngine;

/// Durak rules as a [`RulesEngine`].
///
/// The rules themselves are stateless; variant options live in the
/// `GameState` they were dealt with.
#[derive(Clone, Copy, Debug, Default)]
pub struct Durak;

impl RulesEngine for Durak {
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        legal_moves(state, player)
    }

    fn apply_move(&self, state: &mut GameState, mv: &Move, player: PlayerId) -> Result<()> {
        apply_move(state, mv, player)
    }
}
