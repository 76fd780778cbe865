//! Interpreter configuration loaded from TOML

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{default_catalog, CatalogEntry, PatternSource};
use crate::error::{InterpreterError, Result};
use crate::language::LanguageRegistry;
use crate::matcher::ACCEPT_THRESHOLD;

fn default_threshold() -> f64 {
    ACCEPT_THRESHOLD
}

/// Intent catalog, acceptance threshold and language registry
///
/// ```toml
/// threshold = 0.7
///
/// [[intents]]
/// key = "home"
/// source = { kind = "localized" }
///
/// [[intents]]
/// key = "logout"
/// source = { kind = "literal", phrases = ["logout", "sign out"] }
///
/// [[languages]]
/// code = "en"
/// name = "English"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_catalog")]
    pub intents: Vec<CatalogEntry>,
    #[serde(default)]
    pub languages: LanguageRegistry,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            threshold: ACCEPT_THRESHOLD,
            intents: default_catalog(),
            languages: LanguageRegistry::default(),
        }
    }
}

impl InterpreterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: InterpreterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading interpreter config");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(InterpreterError::InvalidConfig(format!(
                "threshold {} outside [0, 1]",
                self.threshold
            )));
        }

        let mut seen = AHashSet::new();
        for entry in &self.intents {
            if !seen.insert(entry.key) {
                return Err(InterpreterError::DuplicateIntent(entry.key.to_string()));
            }
            if let PatternSource::Literal { phrases } = &entry.source {
                if phrases.iter().all(|p| p.trim().is_empty()) {
                    tracing::warn!(intent = %entry.key, "literal pattern list is empty; intent cannot match");
                }
            }
        }

        let mut codes = AHashSet::new();
        for language in self.languages.languages() {
            if !codes.insert(language.code.as_str()) {
                return Err(InterpreterError::InvalidConfig(format!(
                    "duplicate language code {}",
                    language.code
                )));
            }
        }

        Ok(())
    }
}
