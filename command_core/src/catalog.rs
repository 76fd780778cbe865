//! Per-intent pattern source configuration

use serde::{Deserialize, Serialize};

use crate::types::IntentKey;

/// Where an intent's phrase variants come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternSource {
    /// Base phrase from `voice.commands.<intent>` expanded with politeness templates
    Localized,
    /// Fixed phrase list, used verbatim
    Literal { phrases: Vec<String> },
}

impl PatternSource {
    pub fn literal<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PatternSource::Literal {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: IntentKey,
    pub source: PatternSource,
}

/// The built-in catalog, in canonical intent order
pub fn default_catalog() -> Vec<CatalogEntry> {
    IntentKey::ALL
        .iter()
        .map(|&key| CatalogEntry {
            key,
            source: default_source(key),
        })
        .collect()
}

fn default_source(key: IntentKey) -> PatternSource {
    match key {
        IntentKey::BookAppointment => PatternSource::literal([
            "book appointment",
            "schedule appointment",
            "make appointment",
            "new appointment",
        ]),
        IntentKey::Profile => PatternSource::literal([
            "go to profile",
            "open profile",
            "show profile",
            "my profile",
        ]),
        IntentKey::Settings => PatternSource::literal([
            "go to settings",
            "open settings",
            "show settings",
            "change settings",
        ]),
        IntentKey::Logout => {
            PatternSource::literal(["logout", "sign out", "log out", "exit account"])
        }
        IntentKey::MedicalRecords => PatternSource::literal([
            "medical records",
            "health records",
            "my records",
            "show my records",
        ]),
        IntentKey::FindDoctor => PatternSource::literal([
            "find doctor",
            "search doctor",
            "find a doctor",
            "look for doctor",
        ]),
        IntentKey::FindHospital => PatternSource::literal([
            "find hospital",
            "search hospital",
            "find a hospital",
            "look for hospital",
        ]),
        IntentKey::Home
        | IntentKey::Dashboard
        | IntentKey::Appointments
        | IntentKey::Login
        | IntentKey::ChangeLanguage
        | IntentKey::Emergency
        | IntentKey::Help => PatternSource::Localized,
    }
}
