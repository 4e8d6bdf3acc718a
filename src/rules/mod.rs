//! Rules engine trait for game implementations.
//!
//! `RulesEngine` defines:
//! - Legal moves for each state
//! - How moves modify state
//! - Terminal conditions
//!
//! Callers that only need Durak can use the free functions in
//! `games::durak` directly; the trait is the seam for hosts (bots, servers)
//! that hold rules behind a generic parameter.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
