//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{DurakError, Move, PlayerId};

pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

pub(crate) fn rules_error(err: DurakError) -> PyErr {
    value_error(err)
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(seat: u8) -> Self {
        Self(PlayerId::new(seat))
    }

    /// Seat index (0-based).
    #[getter]
    fn seat(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for Move.
///
/// Moves round-trip through JSON, e.g. `"take"` or
/// `{"attack": {"card": {"rank": "Six", "suit": "Hearts"}}}`.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        serde_json::from_str(json).map(Self).map_err(value_error)
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0).map_err(value_error)
    }

    /// Move kind, e.g. "attack" or "take".
    #[getter]
    fn kind(&self) -> &'static str {
        self.0.kind()
    }

    /// True for Take and EndTurn.
    #[getter]
    fn closes_exchange(&self) -> bool {
        self.0.closes_exchange()
    }

    fn __repr__(&self) -> String {
        format!("Move({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
