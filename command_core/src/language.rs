//! Supported-language registry and language-name extraction from utterances

use serde::{Deserialize, Serialize};

/// A supported UI language, named in its own script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Fixed, ordered mapping from language code to display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// Find the language whose lowercase name occurs in `utterance`
    ///
    /// Only whole-name substring containment counts. When several names
    /// occur, the one registered last wins.
    pub fn extract(&self, utterance: &str) -> Option<&Language> {
        let lower = utterance.to_lowercase();
        let mut found = None;

        for language in &self.languages {
            let name = language.name.to_lowercase();
            if !name.is_empty() && lower.contains(name.as_str()) {
                found = Some(language);
            }
        }

        found
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new(vec![
            Language::new("en", "English"),
            Language::new("hi", "हिन्दी"),
            Language::new("kn", "ಕನ್ನಡ"),
            Language::new("te", "తెలుగు"),
            Language::new("ta", "தமிழ்"),
            Language::new("ml", "മലയാളം"),
        ])
    }
}
