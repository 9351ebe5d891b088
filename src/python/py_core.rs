//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Error, Mark};

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for Mark.
#[pyclass(name = "Mark")]
#[derive(Clone, Copy, Debug)]
pub struct PyMark(pub Mark);

#[pymethods]
impl PyMark {
    /// Create a mark from its symbol.
    ///
    /// Uses score-tag semantics: "X" is X, anything else is O.
    #[new]
    fn new(symbol: &str) -> Self {
        Self(Mark::from_score_tag(symbol))
    }

    /// The other player's mark.
    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    /// The symbol, "X" or "O".
    #[getter]
    fn symbol(&self) -> String {
        self.0.to_string()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Mark({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}
