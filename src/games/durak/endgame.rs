//! Endgame detection, run after every resolved exchange.

use smallvec::SmallVec;

use crate::core::{GameState, Phase, PlayerId};

/// Record newly emptied hands and finish the match once the deck is gone
/// and at most one seat still holds cards.
pub(crate) fn detect(state: &mut GameState) {
    for seat in PlayerId::all(state.player_count()) {
        if state.players[seat.index()].hand.is_empty() && !state.finished_order.contains(&seat) {
            state.finished_order.push(seat);
        }
    }

    if !state.deck.is_empty() {
        return;
    }

    let holders: SmallVec<[PlayerId; 6]> = state.holders().collect();
    match holders.as_slice() {
        [] => {
            state.phase = Phase::Finished;
            state.winner = None;
            state.loser = None;
            tracing::info!(exchange = state.exchange, "match finished in a draw");
        }
        [loser] => {
            state.phase = Phase::Finished;
            state.loser = Some(*loser);
            state.winner = state.finished_order.first().copied();
            tracing::info!(
                exchange = state.exchange,
                loser = %loser,
                winner = ?state.winner,
                "match finished"
            );
        }
        _ => {}
    }
}
