//! Localized string lookup

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{InterpreterError, Result};

/// Active-locale string lookup supplied by the host
///
/// Must stay stable for the duration of one interpreter call. A missing key
/// should yield an empty string; the interpreter tolerates it.
pub trait Localizer {
    fn localize(&self, key: &str) -> String;

    /// Lookup with `{{name}}` placeholder substitution
    fn localize_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.localize(key), args)
    }
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

/// Replace every `{{name}}` in `template` with the matching argument
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

/// Flat `key -> string` translation table for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a nested JSON resource bundle, flattening objects into dotted keys
    ///
    /// `{"voice": {"commands": {"help": "help"}}}` becomes `voice.commands.help`.
    /// Non-string leaves are skipped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| InterpreterError::InvalidConfig(format!("translation bundle: {}", e)))?;
        let mut table = Self::new();
        flatten_into(&mut table, String::new(), &root);
        Ok(table)
    }

    /// Built-in English strings
    pub fn english() -> Self {
        let mut table = Self::new();
        for (key, value) in ENGLISH {
            table.insert(*key, *value);
        }
        table
    }
}

impl From<HashMap<String, String>> for TranslationTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl Localizer for TranslationTable {
    fn localize(&self, key: &str) -> String {
        match self.get(key) {
            Some(value) => value.to_string(),
            None => {
                tracing::trace!(key, "missing translation");
                String::new()
            }
        }
    }
}

fn flatten_into(table: &mut TranslationTable, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten_into(table, key, v);
            }
        }
        Value::String(s) => table.insert(prefix, s.clone()),
        _ => {}
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("voice.commands.home", "go to home"),
    ("voice.commands.dashboard", "go to dashboard"),
    ("voice.commands.appointments", "show appointments"),
    ("voice.commands.login", "go to login"),
    ("voice.commands.changeLanguage", "change language"),
    ("voice.commands.emergency", "emergency"),
    ("voice.commands.help", "help"),
    ("voice.responses.navigatingTo", "Navigating to {{page}}"),
    ("voice.responses.loginFirst", "Please log in first"),
    ("voice.responses.loggingOut", "Logging you out"),
    ("voice.responses.languageChanged", "Language changed to {{language}}"),
    ("voice.responses.languageNotFound", "Sorry, I could not find that language"),
    ("voice.responses.emergency", "Requesting emergency assistance"),
    (
        "voice.responses.help",
        "You can say things like go to dashboard, book appointment or find doctor",
    ),
    ("voice.responses.notUnderstood", "Sorry, I did not understand that"),
    ("nav.home", "Home"),
    ("nav.dashboard", "Dashboard"),
    ("nav.appointments", "Appointments"),
    ("nav.login", "Login"),
    ("nav.profile", "Profile"),
    ("nav.settings", "Settings"),
    ("dashboard.actions.viewMedicalRecords", "Medical Records"),
    ("dashboard.actions.findDoctors", "Find Doctors"),
    ("dashboard.actions.findHospitals", "Find Hospitals"),
    ("language.name", "English"),
    ("language.en", "English"),
    ("language.hi", "Hindi"),
    ("language.kn", "Kannada"),
    ("language.te", "Telugu"),
    ("language.ta", "Tamil"),
    ("language.ml", "Malayalam"),
];
