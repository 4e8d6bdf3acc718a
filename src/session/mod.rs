//! Match hosting helpers for transports.
//!
//! The engine holds no global state. A server keeps its rooms in an owned
//! [`Rooms`] registry and routes every client submission through it.

pub mod rooms;

pub use rooms::{Rooms, SessionError};
