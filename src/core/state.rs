//! Match state.
//!
//! ## GameState
//!
//! Everything one deal owns: deck, discard, trump, seats and hands, the
//! roles of the current exchange, the table, terminal classification, the
//! variant options and (for the cheating variant) the suspect bookkeeping.
//!
//! The state is a plain acyclic record. It serializes with serde (JSON for
//! the wire, `bincode` for compact snapshots) and uses `im` vectors for the
//! deck, discard and history so cloning for look-ahead is cheap.
//!
//! ## Card conservation
//!
//! Cards only move between hands, deck, table and discard; the union of
//! those is always exactly the configured deck. See [`GameState::all_cards`].

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::MoveRecord;
use super::config::{GameOptions, FIRST_BEAT_LIMIT};
use super::error::{DurakError, Result};
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, Rank, Suit};
use crate::rules::GameResult;

/// A player's cards. Hands are usually at most six cards, more after a take.
pub type Hand = SmallVec<[Card; 8]>;

/// Match phase. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    Finished,
}

/// One attack on the table and its cover, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Per-exchange id, assigned in attack order.
    pub id: u32,
    pub attack: Card,
    pub defend: Option<Card>,
    /// Who played the attack card. `None` for translated cards.
    pub owner: Option<PlayerId>,
}

impl Pair {
    #[must_use]
    pub fn is_defended(&self) -> bool {
        self.defend.is_some()
    }

    /// The one or two cards in this pair.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        std::iter::once(self.attack).chain(self.defend)
    }
}

/// One seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: String,
    pub nick: String,
    pub hand: Hand,
}

/// A rank-violating attack awaiting accusation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    /// Id of the table pair the attack created.
    pub pair: u32,
    pub card: Card,
    pub author: PlayerId,
    pub cheat: bool,
}

/// Outcome of one accusation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    pub by: PlayerId,
    pub against: PlayerId,
    pub card: Card,
    pub success: bool,
    /// Move sequence number at which the accusation was made.
    pub t: u32,
}

/// Bookkeeping for the cheating variant.
///
/// Suspects and settled pairs are scoped to the open exchange and dropped
/// whenever the table clears; flags and the accusation log persist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatState {
    pub suspects: Vec<Suspect>,
    pub flagged: PlayerMap<bool>,
    pub accusations: Vec<Accusation>,
    /// Pair ids already accused this exchange.
    pub settled: Vec<u32>,
}

impl CheatState {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            suspects: Vec::new(),
            flagged: PlayerMap::with_default(player_count),
            accusations: Vec::new(),
            settled: Vec::new(),
        }
    }

    /// Forget everything tied to the table that just cleared.
    pub(crate) fn clear_exchange(&mut self) {
        self.suspects.clear();
        self.settled.clear();
    }
}

/// Full match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Draw pile; cards are drawn from the front, the trump card is last.
    pub deck: Vector<Card>,
    pub discard: Vector<Card>,
    /// Fixed for the whole deal.
    pub trump: Card,
    /// Seats in seating order.
    pub players: Vec<PlayerState>,
    pub attacker: PlayerId,
    pub defender: PlayerId,
    /// Pairs in attack order.
    pub table: Vec<Pair>,
    pub phase: Phase,
    /// Defender's hand size when the exchange (or translation) began.
    pub turn_defender_initial_hand_count: usize,
    /// Has the defender beaten at least one card this exchange?
    pub first_beat_done: bool,
    /// Seats that emptied their hand, first finisher first.
    pub finished_order: Vec<PlayerId>,
    pub winner: Option<PlayerId>,
    pub loser: Option<PlayerId>,
    pub options: GameOptions,
    /// Present iff `options.with_trick`.
    pub cheat: Option<CheatState>,
    /// Number of resolved exchanges.
    pub exchange: u32,
    /// Next pair id within the open exchange.
    pub next_pair_id: u32,
    /// Applied moves, oldest first.
    pub history: Vector<MoveRecord>,
    /// Seed of the deal shuffle, `None` for an unshuffled deal.
    pub seed: Option<u64>,
}

impl GameState {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump.suit
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Look up a seat.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerState> {
        self.players
            .get(player.index())
            .ok_or_else(|| DurakError::PlayerNotFound(player.to_string()))
    }

    /// Resolve an external player id to its seat.
    pub fn seat_of(&self, id: &str) -> Result<PlayerId> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .map(|i| PlayerId::new(i as u8))
            .ok_or_else(|| DurakError::PlayerNotFound(id.to_string()))
    }

    /// A seat's hand.
    pub fn hand(&self, player: PlayerId) -> Result<&[Card]> {
        self.player(player).map(|p| p.hand.as_slice())
    }

    /// Is this seat still in the game? Seats with an empty hand stay in
    /// while the deck can refill them.
    #[must_use]
    pub fn is_in_game(&self, player: PlayerId) -> bool {
        self.players
            .get(player.index())
            .is_some_and(|p| !p.hand.is_empty() || !self.deck.is_empty())
    }

    /// Seats still holding cards.
    pub fn holders(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all(self.player_count()).filter(|&p| !self.players[p.index()].hand.is_empty())
    }

    // === Table ===

    /// Maximum number of pairs the table may hold right now.
    #[must_use]
    pub fn attack_limit(&self) -> usize {
        let limit = self.options.max_on_table.min(self.turn_defender_initial_hand_count);
        if self.options.limit_five_before_beat && !self.first_beat_done {
            limit.min(FIRST_BEAT_LIMIT)
        } else {
            limit
        }
    }

    /// Is the table non-empty with every pair covered?
    #[must_use]
    pub fn all_defended(&self) -> bool {
        !self.table.is_empty() && self.table.iter().all(Pair::is_defended)
    }

    /// Ranks of every card on the table, attacks and covers alike.
    #[must_use]
    pub fn table_ranks(&self) -> FxHashSet<Rank> {
        self.table.iter().flat_map(Pair::cards).map(|c| c.rank).collect()
    }

    /// Every card on the table, in attack order.
    pub fn table_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.table.iter().flat_map(Pair::cards)
    }

    // === Card movement ===

    /// Remove `card` from a seat's hand.
    pub(crate) fn take_from_hand(&mut self, player: PlayerId, card: Card) -> Result<Card> {
        let hand = &mut self.players[player.index()].hand;
        let pos = hand
            .iter()
            .position(|&c| c == card)
            .ok_or(DurakError::CardMissing { player, card })?;
        Ok(hand.remove(pos))
    }

    /// Draw from the front of the deck until the seat holds `target` cards.
    /// Returns the number of cards drawn.
    pub(crate) fn draw_up_to(&mut self, player: PlayerId, target: usize) -> usize {
        let mut drawn = 0;
        while self.players[player.index()].hand.len() < target {
            let Some(card) = self.deck.pop_front() else {
                break;
            };
            self.players[player.index()].hand.push(card);
            drawn += 1;
        }
        drawn
    }

    // === Outcome ===

    /// Terminal classification, or `None` while the match is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match (self.phase, self.loser) {
            (Phase::Playing, _) => None,
            (Phase::Finished, Some(loser)) => Some(GameResult::Loser {
                loser,
                winner: self.winner,
            }),
            (Phase::Finished, None) => Some(GameResult::Draw),
        }
    }

    /// Every card the deal owns: hands, deck, discard and table.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.players
            .iter()
            .flat_map(|p| p.hand.iter().copied())
            .chain(self.deck.iter().copied())
            .chain(self.discard.iter().copied())
            .chain(self.table_cards())
            .collect()
    }

    // === Snapshots ===

    /// Encode the state as a compact binary snapshot.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore a state from [`GameState::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
