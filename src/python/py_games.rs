//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{DeckSize, GameOptions, GameState, SeatSpec};
use crate::games::durak::{apply_move, init_game, is_translation_available, legal_moves};
use crate::rules::GameResult;

use super::py_core::{rules_error, value_error, PyMove, PyPlayerId};

/// Python wrapper for a Durak match.
#[pyclass(name = "DurakGame")]
pub struct PyDurakGame {
    state: GameState,
}

#[pymethods]
impl PyDurakGame {
    /// Deal a new match.
    ///
    /// # Arguments
    /// - player_ids: External ids, one per seat (2-6)
    /// - shuffle: Shuffle the deck before dealing
    /// - seed: Shuffle seed; None uses OS entropy
    /// - deck_size: 24, 36 or 52
    #[new]
    #[pyo3(signature = (
        player_ids,
        shuffle = true,
        seed = None,
        deck_size = 36,
        allow_translation = false,
        limit_five_before_beat = false,
        with_trick = false,
        max_on_table = 6
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        player_ids: Vec<String>,
        shuffle: bool,
        seed: Option<u64>,
        deck_size: u8,
        allow_translation: bool,
        limit_five_before_beat: bool,
        with_trick: bool,
        max_on_table: usize,
    ) -> PyResult<Self> {
        let options = GameOptions {
            deck_size: DeckSize::try_from(deck_size).map_err(value_error)?,
            allow_translation,
            limit_five_before_beat,
            with_trick,
            max_on_table,
            seed,
        };
        let seats: Vec<SeatSpec> = player_ids
            .into_iter()
            .map(|id| SeatSpec::new(id.clone(), id))
            .collect();
        let state = init_game(&seats, shuffle, options).map_err(rules_error)?;
        Ok(Self { state })
    }

    /// Legal moves for a seat.
    fn legal_moves(&self, player: &PyPlayerId) -> Vec<PyMove> {
        legal_moves(&self.state, player.0)
            .into_iter()
            .map(PyMove)
            .collect()
    }

    /// Apply a move; raises ValueError if it is not legal.
    fn apply_move(&mut self, mv: &PyMove, player: &PyPlayerId) -> PyResult<()> {
        apply_move(&mut self.state, &mv.0, player.0).map_err(rules_error)
    }

    fn is_translation_available(&self, player: &PyPlayerId) -> bool {
        is_translation_available(&self.state, player.0)
    }

    #[getter]
    fn attacker(&self) -> PyPlayerId {
        PyPlayerId(self.state.attacker)
    }

    #[getter]
    fn defender(&self) -> PyPlayerId {
        PyPlayerId(self.state.defender)
    }

    #[getter]
    fn is_finished(&self) -> bool {
        !self.state.is_playing()
    }

    /// `(winner, loser)` once finished; both `None` for a draw.
    fn result(&self) -> Option<(Option<PyPlayerId>, Option<PyPlayerId>)> {
        match self.state.result()? {
            GameResult::Loser { loser, winner } => Some((winner.map(PyPlayerId), Some(PyPlayerId(loser)))),
            GameResult::Draw => Some((None, None)),
        }
    }

    /// Full state as JSON.
    fn state_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.state).map_err(value_error)
    }

    /// One seat's view as JSON.
    fn view_json(&self, player: &PyPlayerId) -> PyResult<String> {
        let view = self.state.view_for(player.0).map_err(rules_error)?;
        serde_json::to_string(&view).map_err(value_error)
    }

    /// Copy the match for look-ahead.
    fn copy(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.state.is_playing() { "playing" } else { "finished" };
        format!(
            "DurakGame(exchange={}, attacker={}, defender={}, deck={}, status={})",
            self.state.exchange,
            self.state.attacker.0,
            self.state.defender.0,
            self.state.deck.len(),
            status
        )
    }
}
