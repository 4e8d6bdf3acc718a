//! Exchange resolution: rotation and refill.
//!
//! An exchange ends with Take or EndTurn. Both clear the table, move the
//! roles on, refill hands, take a fresh snapshot of the defender's hand and
//! run the endgame check. Translate moves the roles on without ending the
//! exchange.

use smallvec::SmallVec;

use super::endgame;
use crate::core::{GameState, PlayerId, HAND_SIZE};

/// First seat clockwise (the direction play passes) after `from` that is
/// still in the game.
///
/// Falls back to the plain next seat when nobody else is left; the endgame
/// check finishes such a match before anyone can move.
pub(crate) fn next_in_game(state: &GameState, from: PlayerId) -> PlayerId {
    let count = state.player_count();
    let mut seat = from.next(count);
    while seat != from {
        if state.is_in_game(seat) {
            return seat;
        }
        seat = seat.next(count);
    }
    from.next(count)
}

/// Defender picks up the table.
pub(crate) fn take(state: &mut GameState) {
    let defender = state.defender;
    let cards: SmallVec<[_; 12]> = state.table.drain(..).flat_map(|p| p.cards()).collect();
    state.players[defender.index()].hand.extend(cards);

    let (attacker, defender) = if state.player_count() == 2 {
        (state.attacker, state.defender)
    } else {
        let attacker = next_in_game(state, defender);
        (attacker, next_in_game(state, attacker))
    };
    resolve(state, attacker, defender, "take");
}

/// Attacker closes a fully beaten exchange; the table goes to the discard.
pub(crate) fn end_turn(state: &mut GameState) {
    for pair in state.table.drain(..) {
        state.discard.extend(pair.cards());
    }

    let attacker = if state.is_in_game(state.defender) {
        state.defender
    } else {
        next_in_game(state, state.defender)
    };
    let defender = next_in_game(state, attacker);
    resolve(state, attacker, defender, "end_turn");
}

/// Defender passed the attack on: they attack, the next seat defends.
pub(crate) fn translate(state: &mut GameState) {
    let attacker = state.defender;
    let defender = next_in_game(state, attacker);

    state.attacker = attacker;
    state.defender = defender;
    state.turn_defender_initial_hand_count = state.players[defender.index()].hand.len();

    tracing::debug!(attacker = %attacker, defender = %defender, "attack translated");
}

/// Seats in refill order: the attacker first, then the remaining seats
/// counter-clockwise from the attacker, the defender last.
///
/// The defender is the attacker's clockwise neighbour, so walking
/// counter-clockwise is what puts every other seat between them.
pub(crate) fn refill_order(state: &GameState) -> SmallVec<[PlayerId; 6]> {
    let count = state.player_count();
    let (attacker, defender) = (state.attacker, state.defender);

    let mut order: SmallVec<[PlayerId; 6]> = SmallVec::new();
    order.push(attacker);
    let mut seat = attacker.prev(count);
    while seat != attacker {
        if seat != defender {
            order.push(seat);
        }
        seat = seat.prev(count);
    }
    if defender != attacker {
        order.push(defender);
    }
    order
}

/// Draw every seat up to six cards in refill order until the deck runs out.
pub(crate) fn refill(state: &mut GameState) {
    for seat in refill_order(state) {
        if state.deck.is_empty() {
            break;
        }
        state.draw_up_to(seat, HAND_SIZE);
    }
}

fn resolve(state: &mut GameState, attacker: PlayerId, defender: PlayerId, how: &'static str) {
    state.attacker = attacker;
    state.defender = defender;
    refill(state);

    state.exchange += 1;
    state.next_pair_id = 0;
    state.first_beat_done = false;
    if let Some(cheat) = state.cheat.as_mut() {
        cheat.clear_exchange();
    }

    endgame::detect(state);
    if state.is_playing() {
        settle_roles(state);
    }
    state.turn_defender_initial_hand_count = state.players[state.defender.index()].hand.len();

    tracing::debug!(
        how,
        exchange = state.exchange,
        attacker = %state.attacker,
        defender = %state.defender,
        deck = state.deck.len(),
        "exchange resolved"
    );
}

/// Skip seats that came out of the refill with nothing to play.
fn settle_roles(state: &mut GameState) {
    if !state.is_in_game(state.attacker) {
        state.attacker = next_in_game(state, state.attacker);
    }
    if !state.is_in_game(state.defender) || state.defender == state.attacker {
        state.defender = next_in_game(state, state.attacker);
    }
}
