//! Python bindings for the command interpreter using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;

use crate::config::InterpreterConfig;
use crate::dispatcher::Ignore;
use crate::interpreter::{CommandInterpreter, Host};
use crate::locale::TranslationTable;
use crate::similarity::{normalize, score_patterns};
use crate::types::{MatchResult, SessionContext};

/// Best score of `text` against a list of phrase variants (Python function)
#[pyfunction]
pub fn py_score_patterns(text: &str, patterns: Vec<String>) -> f64 {
    score_patterns(&normalize(text), &patterns)
}

fn table_from(translations: Option<HashMap<String, String>>) -> TranslationTable {
    match translations {
        Some(entries) => TranslationTable::from(entries),
        None => TranslationTable::english(),
    }
}

fn match_dict<'py>(py: Python<'py>, result: &MatchResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("intent", result.intent.map(|k| k.as_str()))?;
    dict.set_item("score", result.score)?;
    Ok(dict)
}

/// Python wrapper for the command interpreter
///
/// Navigation and language changes are not performed from Python; they come
/// back in the result dict for the host to act on.
#[pyclass(name = "CommandInterpreter")]
pub struct PyCommandInterpreter {
    interpreter: CommandInterpreter,
}

#[pymethods]
impl PyCommandInterpreter {
    #[new]
    #[pyo3(signature = (config_toml=None))]
    fn new(config_toml: Option<&str>) -> PyResult<Self> {
        let config = match config_toml {
            Some(content) => InterpreterConfig::from_toml_str(content)
                .map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => InterpreterConfig::default(),
        };
        Ok(Self {
            interpreter: CommandInterpreter::new(config),
        })
    }

    /// Score an utterance without dispatching it
    #[pyo3(signature = (text, translations=None))]
    fn match_utterance<'py>(
        &self,
        py: Python<'py>,
        text: &str,
        translations: Option<HashMap<String, String>>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let table = table_from(translations);
        let result = self.interpreter.match_utterance(text, &table);
        match_dict(py, &result)
    }

    /// Match and dispatch an utterance
    #[pyo3(signature = (text, is_authenticated, translations=None))]
    fn interpret<'py>(
        &self,
        py: Python<'py>,
        text: &str,
        is_authenticated: bool,
        translations: Option<HashMap<String, String>>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let table = table_from(translations);
        let host = Host {
            localizer: &table,
            navigator: &Ignore,
            switcher: &Ignore,
        };
        let outcome = self
            .interpreter
            .interpret(text, SessionContext { is_authenticated }, &host);

        let dict = PyDict::new_bound(py);
        dict.set_item("intent", outcome.intent.map(|k| k.as_str()))?;
        dict.set_item("score", outcome.score)?;
        dict.set_item("response", outcome.response_text)?;
        dict.set_item("navigation_target", outcome.navigation_target)?;
        let request = match &outcome.request {
            Some(request) => Some(serde_json::to_string(request).map_err(|e| {
                PyValueError::new_err(format!("Failed to serialize host request: {}", e))
            })?),
            None => None,
        };
        dict.set_item("request", request)?;
        Ok(dict)
    }

    /// Supported language codes, in registry order
    fn languages(&self) -> Vec<String> {
        self.interpreter
            .languages()
            .languages()
            .iter()
            .map(|l| l.code.clone())
            .collect()
    }
}
