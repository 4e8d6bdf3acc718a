//! Seats and per-seat data storage.
//!
//! ## PlayerId
//!
//! A seat index (0-based, seating order). Durak seats 2-6 players; the
//! engine addresses players only by seat, while callers keep their own
//! string ids in [`SeatSpec`].
//!
//! Seats are numbered clockwise. Play passes clockwise, so [`PlayerId::next`]
//! is the seat play passes to and [`PlayerId::prev`] walks against play.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Minimum number of seats at a table.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of seats at a table.
pub const MAX_PLAYERS: usize = 6;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat clockwise, in the direction play passes.
    ///
    /// ```
    /// use rust_durak::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// The next seat counter-clockwise, against the direction of play.
    #[must_use]
    pub const fn prev(self, player_count: usize) -> Self {
        Self(((self.0 as usize + player_count - 1) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count`.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Caller-supplied identity for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatSpec {
    /// Stable external id (account, connection, bot name).
    pub id: String,
    /// Display name.
    pub nick: String,
}

impl SeatSpec {
    pub fn new(id: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nick: nick.into(),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_durak::core::{PlayerId, PlayerMap};
///
/// let mut flagged: PlayerMap<bool> = PlayerMap::with_value(3, false);
/// flagged[PlayerId::new(1)] = true;
/// assert!(flagged[PlayerId::new(1)]);
/// assert!(!flagged[PlayerId::new(2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
