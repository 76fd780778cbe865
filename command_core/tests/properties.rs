use command_core::{
    build_library, default_catalog, match_intent, normalize, score_patterns, CommandInterpreter,
    TranslationTable, ACCEPT_THRESHOLD,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_stays_in_unit_range(utterance in "\\PC{0,60}") {
        let interpreter = CommandInterpreter::default();
        let table = TranslationTable::english();
        let result = interpreter.match_utterance(&utterance, &table);
        prop_assert!((0.0..=1.0).contains(&result.score));
        if result.intent.is_some() {
            prop_assert!(result.score >= ACCEPT_THRESHOLD);
        }
    }

    #[test]
    fn matching_is_idempotent(utterance in "[a-z ]{0,40}") {
        let library = build_library(&default_catalog(), &TranslationTable::english());
        let first = match_intent(&utterance, &library, ACCEPT_THRESHOLD);
        let second = match_intent(&utterance, &library, ACCEPT_THRESHOLD);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn localized_variants_match_exactly(
        base in "[a-z][a-z.,/#!$%^&*;:{}=_`~()'?-]{0,7}( [a-z][a-z.,/#!$%^&*;:{}=_`~()'?-]{0,7}){0,3}"
    ) {
        let table = TranslationTable::new().with("voice.commands.help", base.as_str());
        let library = build_library(&default_catalog(), &table);
        let help = library
            .iter()
            .find(|p| p.key == command_core::IntentKey::Help)
            .expect("help is in the default catalog");
        for variant in &help.phrases {
            prop_assert_eq!(score_patterns(&normalize(variant), &help.phrases), 1.0);
        }
    }
}

#[test]
fn every_default_variant_scores_exactly_against_its_intent() {
    let library = build_library(&default_catalog(), &TranslationTable::english());
    for intent in &library {
        for variant in &intent.phrases {
            assert_eq!(
                score_patterns(&normalize(variant), &intent.phrases),
                1.0,
                "{} / {}",
                intent.key,
                variant
            );
        }
    }
}
