//! # rust-durak
//!
//! Rules engine for the card game Durak ("the fool").
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: The engine deals, validates and applies moves. It holds
//!    no sockets, clocks or global registries; a transport owns each
//!    `GameState` and serializes submissions against it.
//!
//! 2. **Legal Set First**: Every submitted move is checked for structural
//!    equality against [`legal_moves`]. A failed move leaves the state
//!    untouched.
//!
//! 3. **N-Player**: 2-6 seats. Rotation, refill and the endgame check walk
//!    the seating order and skip seats that are out of the game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Deck, discard and move history use
//!   `im-rs`, so cloning a state for look-ahead is cheap.
//!
//! - **Seeded Shuffles**: `ChaCha8` seeded from the options (or OS entropy),
//!   with the seed recorded in the state for replays.
//!
//! - **Snapshots**: `GameState` is serde-serializable; bincode for compact
//!   snapshots, JSON for transports.
//!
//! ## Modules
//!
//! - `core`: Seats, options, moves, state, views, errors, RNG
//! - `cards`: Suits, ranks, the beat relation, deck construction
//! - `rules`: `RulesEngine` trait and `GameResult`
//! - `games`: The Durak rules
//! - `session`: Owned room registry for transports
//!
//! ## Example
//!
//! ```
//! use rust_durak::{init_game, legal_moves, apply_move, GameOptions, SeatSpec};
//!
//! let seats = vec![SeatSpec::new("ann", "Ann"), SeatSpec::new("bob", "Bob")];
//! let mut state = init_game(&seats, true, GameOptions::default().with_seed(42)).unwrap();
//!
//! let attacker = state.attacker;
//! let mv = legal_moves(&state, attacker)[0];
//! apply_move(&mut state, &mv, attacker).unwrap();
//! assert_eq!(state.table.len(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Accusation, CheatState, DeckSize, DurakError, GameOptions, GameRng, GameState, Hand, Move,
    MoveRecord, Pair, Phase, PlayerId, PlayerMap, PlayerState, PlayerView, SeatSpec, Suspect,
    HAND_SIZE,
};

pub use crate::cards::{can_beat, Card, Rank, Suit};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::durak::{apply_move, init_game, is_translation_available, legal_moves, Durak};

pub use crate::session::{Rooms, SessionError};
