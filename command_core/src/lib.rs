//! Command core - voice command interpretation for the patient portal
//!
//! Turns a transcribed utterance into one intent and a localized response:
//! phrase variants are built per intent in the active language, scored with
//! exact/containment/word-overlap matching, and the winner is dispatched to
//! navigation or language-change requests on the host.

pub mod types;
pub mod error;
pub mod catalog;
pub mod locale;
pub mod patterns;
pub mod similarity;
pub mod matcher;
pub mod language;
pub mod dispatcher;
pub mod config;
pub mod interpreter;
pub mod listening;

pub use types::*;
pub use error::{InterpreterError, Result};
pub use catalog::*;
pub use locale::*;
pub use patterns::*;
pub use similarity::*;
pub use matcher::*;
pub use language::*;
pub use dispatcher::*;
pub use config::*;
pub use interpreter::*;
pub use listening::*;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn command_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyCommandInterpreter>()?;
    m.add_function(wrap_pyfunction!(py_score_patterns, m)?)?;
    Ok(())
}
