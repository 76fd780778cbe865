//! Dispatcher - turns a matched intent into a response and host actions

use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::locale::Localizer;
use crate::types::{DispatchOutcome, HostRequest, IntentKey, MatchResult, SessionContext};

/// Requests a view transition; fire-and-forget
pub trait Navigator {
    fn navigate(&self, target: &str) -> Result<()>;
}

/// Requests switching the active locale; fire-and-forget
pub trait LanguageSwitcher {
    fn change_language(&self, code: &str) -> Result<()>;
}

impl<F> Navigator for F
where
    F: Fn(&str) -> Result<()>,
{
    fn navigate(&self, target: &str) -> Result<()> {
        self(target)
    }
}

impl<F> LanguageSwitcher for F
where
    F: Fn(&str) -> Result<()>,
{
    fn change_language(&self, code: &str) -> Result<()> {
        self(code)
    }
}

/// Collaborator that accepts every request and does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl Navigator for Ignore {
    fn navigate(&self, _target: &str) -> Result<()> {
        Ok(())
    }
}

impl LanguageSwitcher for Ignore {
    fn change_language(&self, _code: &str) -> Result<()> {
        Ok(())
    }
}

/// View route and page-label translation key of a navigation intent
pub fn route(intent: IntentKey) -> Option<(&'static str, &'static str)> {
    match intent {
        IntentKey::Home => Some(("/", "nav.home")),
        IntentKey::Dashboard => Some(("/dashboard", "nav.dashboard")),
        IntentKey::Appointments | IntentKey::BookAppointment => {
            Some(("/appointments/book", "nav.appointments"))
        }
        IntentKey::Login => Some(("/login", "nav.login")),
        IntentKey::Profile => Some(("/profile", "nav.profile")),
        IntentKey::Settings => Some(("/settings", "nav.settings")),
        IntentKey::MedicalRecords => {
            Some(("/medical-records", "dashboard.actions.viewMedicalRecords"))
        }
        IntentKey::FindDoctor => Some(("/find-doctors", "dashboard.actions.findDoctors")),
        IntentKey::FindHospital => Some(("/find-hospitals", "dashboard.actions.findHospitals")),
        IntentKey::ChangeLanguage | IntentKey::Emergency | IntentKey::Help | IntentKey::Logout => {
            None
        }
    }
}

fn response_key(name: &str) -> String {
    format!("voice.responses.{}", name)
}

pub struct Dispatcher<'a> {
    localizer: &'a dyn Localizer,
    navigator: &'a dyn Navigator,
    switcher: &'a dyn LanguageSwitcher,
    languages: &'a LanguageRegistry,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        localizer: &'a dyn Localizer,
        navigator: &'a dyn Navigator,
        switcher: &'a dyn LanguageSwitcher,
        languages: &'a LanguageRegistry,
    ) -> Self {
        Self {
            localizer,
            navigator,
            switcher,
            languages,
        }
    }

    /// Dispatch one match result
    ///
    /// The response text is always produced before any collaborator is
    /// called. Collaborator failures are logged and swallowed.
    pub fn dispatch(
        &self,
        result: &MatchResult,
        utterance: &str,
        session: SessionContext,
    ) -> DispatchOutcome {
        let mut outcome = DispatchOutcome {
            intent: result.intent,
            score: result.score,
            response_text: String::new(),
            navigation_target: None,
            request: None,
        };

        let Some(intent) = result.intent else {
            outcome.response_text = self.respond("notUnderstood");
            return outcome;
        };

        if intent.requires_auth() && !session.is_authenticated {
            tracing::debug!(%intent, "intent requires a signed-in user");
            outcome.response_text = self.respond("loginFirst");
            return outcome;
        }

        match intent {
            IntentKey::Logout => {
                outcome.response_text = self.respond("loggingOut");
                outcome.request = Some(HostRequest::Logout);
            }
            IntentKey::Emergency => {
                outcome.response_text = self.respond("emergency");
                outcome.request = Some(HostRequest::Emergency);
            }
            IntentKey::Help => {
                outcome.response_text = self.respond("help");
            }
            IntentKey::ChangeLanguage => self.change_language(utterance, &mut outcome),
            _ => match route(intent) {
                Some((target, label_key)) => {
                    let page = self.localizer.localize(label_key);
                    outcome.response_text = self
                        .localizer
                        .localize_with(&response_key("navigatingTo"), &[("page", page.as_str())]);
                    outcome.navigation_target = Some(target.to_string());
                    if let Err(e) = self.navigator.navigate(target) {
                        tracing::warn!(route = target, error = %e, "navigation request failed");
                    }
                }
                None => {
                    outcome.response_text = self.respond("notUnderstood");
                }
            },
        }

        outcome
    }

    fn change_language(&self, utterance: &str, outcome: &mut DispatchOutcome) {
        let Some(language) = self.languages.extract(utterance) else {
            outcome.response_text = self.respond("languageNotFound");
            return;
        };

        let mut label = self.localizer.localize(&format!("language.{}", language.code));
        if label.is_empty() {
            label = language.name.clone();
        }
        outcome.response_text = self
            .localizer
            .localize_with(&response_key("languageChanged"), &[("language", label.as_str())]);
        outcome.request = Some(HostRequest::ChangeLanguage {
            code: language.code.clone(),
        });

        if let Err(e) = self.switcher.change_language(&language.code) {
            tracing::warn!(code = %language.code, error = %e, "language change request failed");
        }
    }

    fn respond(&self, name: &str) -> String {
        self.localizer.localize(&response_key(name))
    }
}
