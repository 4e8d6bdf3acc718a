//! Cheating variant: suspect tracking and accusations.
//!
//! A `CheatAttack` puts a rank-violating card on the table and registers a
//! suspect keyed by the new pair's id. Any other seat may accuse the owner
//! of any attacking pair once per exchange. A correct accusation returns
//! that pair and every later one to the cheater's hand and flags the
//! cheater; a wrong one flags the accuser. Every accusation is logged.

use smallvec::SmallVec;

use super::exchange;
use crate::cards::Card;
use crate::core::{Accusation, GameState, Move, Pair, PlayerId, Suspect};

/// Remember a rank-violating attack.
pub(crate) fn register_suspect(state: &mut GameState, pair: u32, card: Card, author: PlayerId) {
    if let Some(cheat) = state.cheat.as_mut() {
        cheat.suspects.push(Suspect {
            pair,
            card,
            author,
            cheat: true,
        });
    }
}

/// Accusations `player` may raise right now.
pub(crate) fn accuse_moves(state: &GameState, player: PlayerId, out: &mut Vec<Move>) {
    let Some(cheat) = state.cheat.as_ref() else {
        return;
    };

    for pair in &state.table {
        let Some(owner) = pair.owner else {
            continue;
        };
        if owner != player && !cheat.settled.contains(&pair.id) {
            out.push(Move::Accuse {
                against: owner,
                card: pair.attack,
            });
        }
    }
}

/// Resolve an accusation already checked against the legal move set.
pub(crate) fn accuse(state: &mut GameState, by: PlayerId, against: PlayerId, card: Card, t: u32) {
    let Some(index) = state.table.iter().position(|p| p.attack == card) else {
        return;
    };
    let pair_id = state.table[index].id;

    let Some(cheat) = state.cheat.as_mut() else {
        return;
    };
    cheat.settled.push(pair_id);

    let success = cheat
        .suspects
        .iter()
        .any(|s| s.pair == pair_id && s.author == against && s.cheat);

    if success {
        let returned: SmallVec<[Pair; 6]> = state.table.drain(index..).collect();
        cheat
            .suspects
            .retain(|s| returned.iter().all(|p| p.id != s.pair));
        cheat.flagged[against] = true;

        let hand = &mut state.players[against.index()].hand;
        for pair in &returned {
            hand.extend(pair.cards());
        }
    } else {
        cheat.flagged[by] = true;
    }

    cheat.accusations.push(Accusation {
        by,
        against,
        card,
        success,
        t,
    });

    tracing::debug!(
        by = %by,
        against = %against,
        card = %card,
        success,
        "accusation resolved"
    );

    // Rolled back to an empty table with nothing left to attack with.
    if success && state.table.is_empty() && state.players[state.attacker.index()].hand.is_empty() {
        exchange::end_turn(state);
    }
}
