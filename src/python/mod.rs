//! Python bindings for the rust-durak rules engine.
//!
//! Built with the `python` feature, for bot and training hosts.
//!
//! # Quick Start
//!
//! ```python
//! import rust_durak as durak
//!
//! game = durak.DurakGame(["ann", "bob"], seed=42, allow_translation=True)
//! moves = game.legal_moves(game.attacker)
//! game.apply_move(moves[0], game.attacker)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// rust_durak: Durak rules for Python hosts.
#[pymodule]
fn rust_durak(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyDurakGame>()?;

    Ok(())
}
