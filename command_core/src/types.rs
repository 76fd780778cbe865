//! Core data types for interpreter results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InterpreterError;

/// A recognized user goal
///
/// The declaration order is the canonical enumeration order used by the
/// default catalog, and therefore the tie-break order of the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntentKey {
    Home,
    Dashboard,
    Appointments,
    BookAppointment,
    Login,
    ChangeLanguage,
    Emergency,
    Help,
    Profile,
    Settings,
    Logout,
    MedicalRecords,
    FindDoctor,
    FindHospital,
}

impl IntentKey {
    pub const ALL: [IntentKey; 14] = [
        IntentKey::Home,
        IntentKey::Dashboard,
        IntentKey::Appointments,
        IntentKey::BookAppointment,
        IntentKey::Login,
        IntentKey::ChangeLanguage,
        IntentKey::Emergency,
        IntentKey::Help,
        IntentKey::Profile,
        IntentKey::Settings,
        IntentKey::Logout,
        IntentKey::MedicalRecords,
        IntentKey::FindDoctor,
        IntentKey::FindHospital,
    ];

    /// Key as used in translation tables and configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKey::Home => "home",
            IntentKey::Dashboard => "dashboard",
            IntentKey::Appointments => "appointments",
            IntentKey::BookAppointment => "bookAppointment",
            IntentKey::Login => "login",
            IntentKey::ChangeLanguage => "changeLanguage",
            IntentKey::Emergency => "emergency",
            IntentKey::Help => "help",
            IntentKey::Profile => "profile",
            IntentKey::Settings => "settings",
            IntentKey::Logout => "logout",
            IntentKey::MedicalRecords => "medicalRecords",
            IntentKey::FindDoctor => "findDoctor",
            IntentKey::FindHospital => "findHospital",
        }
    }

    /// Intents that only make sense for a signed-in user
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            IntentKey::Dashboard
                | IntentKey::Appointments
                | IntentKey::BookAppointment
                | IntentKey::Profile
                | IntentKey::Logout
                | IntentKey::MedicalRecords
        )
    }
}

impl fmt::Display for IntentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentKey {
    type Err = InterpreterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| InterpreterError::UnknownIntent(s.to_string()))
    }
}

/// Outcome of scoring one utterance against the pattern library
///
/// `intent` is `None` when the best score fell below the acceptance
/// threshold; `score` still reports that best score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub intent: Option<IntentKey>,
    pub score: f64,
}

impl MatchResult {
    pub fn none() -> Self {
        Self {
            intent: None,
            score: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.intent.is_some()
    }
}

/// Read-only view of the host's session, supplied fresh per utterance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub is_authenticated: bool,
}

impl SessionContext {
    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
        }
    }
}

/// Follow-up the host must carry out itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostRequest {
    Logout,
    Emergency,
    ChangeLanguage { code: String },
}

/// Result of dispatching one utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub intent: Option<IntentKey>,
    pub score: f64,
    pub response_text: String,
    pub navigation_target: Option<String>,
    pub request: Option<HostRequest>,
}
