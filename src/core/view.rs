//! Per-seat public projection of a `GameState`.
//!
//! A view carries what one seat is allowed to see: its own hand plus the
//! public parts of the match (table, roles, trump, pile sizes, hand sizes).
//! Transports send views to clients instead of the full state.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::{PlayerId, PlayerMap};
use super::state::{GameState, Hand, Pair, Phase};
use crate::cards::Card;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub hand: Hand,
    pub hand_sizes: PlayerMap<usize>,
    pub nicks: PlayerMap<String>,
    pub trump: Card,
    pub deck_size: usize,
    pub discard_size: usize,
    pub table: Vec<Pair>,
    pub attacker: PlayerId,
    pub defender: PlayerId,
    pub phase: Phase,
    pub finished_order: Vec<PlayerId>,
    pub winner: Option<PlayerId>,
    pub loser: Option<PlayerId>,
    /// Caught or wrongly-accusing seats (cheat variant only).
    pub flagged: Option<PlayerMap<bool>>,
}

impl GameState {
    /// Build the view for one seat.
    pub fn view_for(&self, viewer: PlayerId) -> Result<PlayerView> {
        let hand = self.player(viewer)?.hand.clone();
        let count = self.player_count();

        Ok(PlayerView {
            viewer,
            hand,
            hand_sizes: PlayerMap::new(count, |p| self.players[p.index()].hand.len()),
            nicks: PlayerMap::new(count, |p| self.players[p.index()].nick.clone()),
            trump: self.trump,
            deck_size: self.deck.len(),
            discard_size: self.discard.len(),
            table: self.table.clone(),
            attacker: self.attacker,
            defender: self.defender,
            phase: self.phase,
            finished_order: self.finished_order.clone(),
            winner: self.winner,
            loser: self.loser,
            flagged: self.cheat.as_ref().map(|c| c.flagged.clone()),
        })
    }
}
