//! Command interpreter - utterance in, response and actions out

use crate::config::InterpreterConfig;
use crate::dispatcher::{Dispatcher, LanguageSwitcher, Navigator};
use crate::language::LanguageRegistry;
use crate::locale::Localizer;
use crate::matcher::match_intent;
use crate::patterns::{build_library, IntentPatterns};
use crate::types::{DispatchOutcome, MatchResult, SessionContext};

/// Host collaborators for one interpreter call
pub struct Host<'a> {
    pub localizer: &'a dyn Localizer,
    pub navigator: &'a dyn Navigator,
    pub switcher: &'a dyn LanguageSwitcher,
}

/// Stateless interpreter over a fixed configuration
///
/// The pattern library is rebuilt from the supplied localizer on every
/// call, so a language switch between utterances is always picked up.
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    config: InterpreterConfig,
}

impl CommandInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn languages(&self) -> &LanguageRegistry {
        &self.config.languages
    }

    /// Pattern library in the locale of `localizer`
    pub fn library(&self, localizer: &dyn Localizer) -> Vec<IntentPatterns> {
        build_library(&self.config.intents, localizer)
    }

    /// Score an utterance without dispatching it
    pub fn match_utterance(&self, utterance: &str, localizer: &dyn Localizer) -> MatchResult {
        let library = self.library(localizer);
        match_intent(utterance, &library, self.config.threshold)
    }

    /// Match and dispatch one utterance
    pub fn interpret(&self, utterance: &str, session: SessionContext, host: &Host<'_>) -> DispatchOutcome {
        let result = self.match_utterance(utterance, host.localizer);
        let dispatcher = Dispatcher::new(
            host.localizer,
            host.navigator,
            host.switcher,
            &self.config.languages,
        );
        dispatcher.dispatch(&result, utterance, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Ignore;
    use crate::locale::TranslationTable;
    use crate::types::IntentKey;

    #[test]
    fn test_interpret_home() {
        let interpreter = CommandInterpreter::default();
        let table = TranslationTable::english();
        let host = Host {
            localizer: &table,
            navigator: &Ignore,
            switcher: &Ignore,
        };

        let outcome = interpreter.interpret("Go to home!", SessionContext::anonymous(), &host);
        assert_eq!(outcome.intent, Some(IntentKey::Home));
        assert_eq!(outcome.score, 1.0);
        assert_eq!(outcome.navigation_target.as_deref(), Some("/"));
        assert_eq!(outcome.response_text, "Navigating to Home");
    }

    #[test]
    fn test_locale_switch_between_calls() {
        let interpreter = CommandInterpreter::default();
        let english = TranslationTable::english();
        let hindi = TranslationTable::new().with("voice.commands.help", "मदद करो");

        assert_eq!(
            interpreter.match_utterance("मदद करो", &english).intent,
            None
        );
        assert_eq!(
            interpreter.match_utterance("मदद करो", &hindi).intent,
            Some(IntentKey::Help)
        );
    }
}
