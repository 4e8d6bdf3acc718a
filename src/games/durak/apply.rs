//! State transition.

use super::legal::legal_moves;
use super::{cheat, exchange};
use crate::cards::Card;
use crate::core::{DurakError, GameState, Move, MoveRecord, Pair, PlayerId, Result};

/// Validate `mv` for `player` and apply it.
///
/// The move must compare equal to an entry of [`legal_moves`]. Cheat-variant
/// moves fail with `ModeDisabled` while the variant is off. Validation runs
/// before the first write, so a failing call leaves `state` untouched.
///
/// Take and EndTurn resolve the exchange: roles rotate, hands are refilled,
/// the defender's hand is snapshotted and the endgame check runs.
pub fn apply_move(state: &mut GameState, mv: &Move, player: PlayerId) -> Result<()> {
    state.player(player)?;

    if mv.requires_trick() && !state.options.with_trick {
        tracing::warn!(player = %player, mv = %mv, "cheat-variant move while the variant is off");
        return Err(DurakError::ModeDisabled);
    }

    if !legal_moves(state, player).contains(mv) {
        tracing::warn!(
            player = %player,
            mv = %mv,
            attacker = %state.attacker,
            defender = %state.defender,
            "illegal move rejected"
        );
        return Err(DurakError::IllegalMove);
    }

    let exchange = state.exchange;
    let sequence = state.history.len() as u32;

    match *mv {
        Move::Attack { card } => {
            state.take_from_hand(player, card)?;
            push_attack(state, card, Some(player));
        }
        Move::CheatAttack { card } => {
            state.take_from_hand(player, card)?;
            let pair = push_attack(state, card, Some(player));
            cheat::register_suspect(state, pair, card, player);
        }
        Move::Defend { attack, card } => {
            let index = state
                .table
                .iter()
                .position(|p| p.attack == attack && !p.is_defended())
                .ok_or(DurakError::IllegalMove)?;
            state.take_from_hand(player, card)?;
            state.table[index].defend = Some(card);
            state.first_beat_done = true;
        }
        Move::Take => exchange::take(state),
        Move::EndTurn => exchange::end_turn(state),
        Move::Translate { card } => {
            state.take_from_hand(player, card)?;
            push_attack(state, card, None);
            exchange::translate(state);
        }
        Move::Accuse { against, card } => cheat::accuse(state, player, against, card, sequence),
    }

    state.history.push_back(MoveRecord {
        player,
        mv: *mv,
        exchange,
        sequence,
    });

    tracing::debug!(
        player = %player,
        mv = %mv,
        sequence,
        attacker = %state.attacker,
        defender = %state.defender,
        table = state.table.len(),
        "move applied"
    );

    Ok(())
}

/// Put an attack card on the table; returns the new pair's id.
fn push_attack(state: &mut GameState, card: Card, owner: Option<PlayerId>) -> u32 {
    let id = state.next_pair_id;
    state.next_pair_id += 1;
    state.table.push(Pair {
        id,
        attack: card,
        defend: None,
        owner,
    });
    id
}
