//! Core engine types: seats, options, moves, state, errors, RNG.
//!
//! Everything here is plain data plus small helpers; the rules that move
//! a state forward live in `games::durak`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Move, MoveRecord};
pub use config::{DeckSize, GameOptions, FIRST_BEAT_LIMIT, HAND_SIZE};
pub use error::{DurakError, Result};
pub use player::{PlayerId, PlayerMap, SeatSpec, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
pub use state::{Accusation, CheatState, GameState, Hand, Pair, Phase, PlayerState, Suspect};
pub use view::PlayerView;
