//! Room registry.
//!
//! A transport owns one `Rooms` value and passes it (or a lock around it)
//! through its request handling. Submissions take `&mut self`, so two moves
//! against the same room can never interleave; the transport decides how
//! to serialize access across tasks.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{DurakError, GameOptions, GameState, Move, PlayerView, SeatSpec};
use crate::games::durak::{apply_move, init_game, legal_moves};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("room not found: {0}")]
    RoomNotFound(String),

    #[error("room already open: {0}")]
    RoomExists(String),

    #[error(transparent)]
    Rules(#[from] DurakError),
}

/// Explicitly owned map from room id to match state.
#[derive(Clone, Debug, Default)]
pub struct Rooms {
    rooms: FxHashMap<String, GameState>,
}

impl Rooms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a new match into `room`.
    pub fn open(
        &mut self,
        room: impl Into<String>,
        seats: &[SeatSpec],
        shuffle: bool,
        options: GameOptions,
    ) -> Result<&GameState, SessionError> {
        let room = room.into();
        if self.rooms.contains_key(&room) {
            return Err(SessionError::RoomExists(room));
        }

        let state = init_game(seats, shuffle, options)?;
        tracing::info!(room = %room, players = seats.len(), "room opened");
        Ok(self.rooms.entry(room).or_insert(state))
    }

    #[must_use]
    pub fn get(&self, room: &str) -> Option<&GameState> {
        self.rooms.get(room)
    }

    /// Legal moves for the player with external id `player`.
    pub fn legal_moves(&self, room: &str, player: &str) -> Result<Vec<Move>, SessionError> {
        let state = self.state(room)?;
        let seat = state.seat_of(player)?;
        Ok(legal_moves(state, seat))
    }

    /// What `player` may see of the match.
    pub fn view(&self, room: &str, player: &str) -> Result<PlayerView, SessionError> {
        let state = self.state(room)?;
        let seat = state.seat_of(player)?;
        Ok(state.view_for(seat)?)
    }

    /// Apply a client-submitted move. The move is always re-validated.
    pub fn submit(&mut self, room: &str, player: &str, mv: &Move) -> Result<&GameState, SessionError> {
        let state = self
            .rooms
            .get_mut(room)
            .ok_or_else(|| SessionError::RoomNotFound(room.to_string()))?;
        let seat = state.seat_of(player)?;

        if let Err(err) = apply_move(state, mv, seat) {
            tracing::warn!(room, player, mv = %mv, %err, "submission rejected");
            return Err(err.into());
        }
        Ok(state)
    }

    /// Remove a room, returning its final state.
    pub fn close(&mut self, room: &str) -> Option<GameState> {
        let state = self.rooms.remove(room);
        if state.is_some() {
            tracing::info!(room, "room closed");
        }
        state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn state(&self, room: &str) -> Result<&GameState, SessionError> {
        self.rooms
            .get(room)
            .ok_or_else(|| SessionError::RoomNotFound(room.to_string()))
    }
}
