//! Pattern library builder - phrase variants per intent in the active language

use crate::catalog::{CatalogEntry, PatternSource};
use crate::locale::Localizer;
use crate::similarity::normalize;
use crate::types::IntentKey;

/// Politeness templates applied around a localized base phrase
const VARIANT_PREFIXES: [&str; 3] = ["please ", "can you ", "i want to "];
const VARIANT_SUFFIX: &str = " please";

/// Phrase variants of one intent, all lowercase and trimmed
///
/// `inert` marks a localized set whose base phrase was missing; the
/// matcher never scores it, so the bare politeness templates left over
/// cannot win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentPatterns {
    pub key: IntentKey,
    pub phrases: Vec<String>,
    pub inert: bool,
}

/// Translation key holding an intent's base phrase
pub fn command_key(key: IntentKey) -> String {
    format!("voice.commands.{}", key.as_str())
}

/// Build the ordered variant list for one catalog entry
///
/// Never fails: an empty localized phrase still yields the degenerate
/// variant set, which `build_library` marks inert.
pub fn build_patterns(entry: &CatalogEntry, localizer: &dyn Localizer) -> Vec<String> {
    match &entry.source {
        PatternSource::Localized => {
            let base = localizer.localize(&command_key(entry.key)).to_lowercase();
            let base = base.trim();
            let mut variants = Vec::with_capacity(VARIANT_PREFIXES.len() + 2);
            variants.push(base.to_string());
            for prefix in VARIANT_PREFIXES {
                variants.push(format!("{}{}", prefix, base).trim().to_string());
            }
            variants.push(format!("{}{}", base, VARIANT_SUFFIX).trim().to_string());
            variants
        }
        PatternSource::Literal { phrases } => phrases
            .iter()
            .map(|p| p.to_lowercase().trim().to_string())
            .collect(),
    }
}

/// Build the whole library, preserving catalog order
pub fn build_library(catalog: &[CatalogEntry], localizer: &dyn Localizer) -> Vec<IntentPatterns> {
    catalog
        .iter()
        .map(|entry| {
            let phrases = build_patterns(entry, localizer);
            let inert = match entry.source {
                PatternSource::Localized => phrases
                    .first()
                    .map_or(true, |base| normalize(base).trim().is_empty()),
                PatternSource::Literal { .. } => false,
            };
            if inert {
                tracing::debug!(intent = %entry.key, "no base phrase in active locale");
            }
            IntentPatterns {
                key: entry.key,
                phrases,
                inert,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::locale::TranslationTable;

    fn localized(key: IntentKey) -> CatalogEntry {
        CatalogEntry {
            key,
            source: PatternSource::Localized,
        }
    }

    #[test]
    fn test_localized_variants() {
        let table = TranslationTable::new().with("voice.commands.dashboard", "Go To Dashboard ");
        let variants = build_patterns(&localized(IntentKey::Dashboard), &table);
        assert_eq!(
            variants,
            vec![
                "go to dashboard",
                "please go to dashboard",
                "can you go to dashboard",
                "i want to go to dashboard",
                "go to dashboard please",
            ]
        );
    }

    #[test]
    fn test_literal_variants_are_lowercased() {
        let entry = CatalogEntry {
            key: IntentKey::Logout,
            source: PatternSource::literal(["Sign Out", " log out "]),
        };
        let variants = build_patterns(&entry, &TranslationTable::new());
        assert_eq!(variants, vec!["sign out", "log out"]);
    }

    #[test]
    fn test_missing_translation_gives_degenerate_set() {
        let variants = build_patterns(&localized(IntentKey::Help), &TranslationTable::new());
        assert_eq!(variants.len(), 5);
        assert_eq!(variants[0], "");
        assert_eq!(variants[1], "please");
        assert!(variants.iter().all(|v| v.trim() == v));
    }

    #[test]
    fn test_library_follows_locale_per_call() {
        let catalog = default_catalog();
        let english = TranslationTable::english();
        let hindi = TranslationTable::new().with("voice.commands.help", "मदद");

        let first = build_library(&catalog, &english);
        let second = build_library(&catalog, &hindi);

        let help = |lib: &[IntentPatterns]| {
            lib.iter()
                .find(|p| p.key == IntentKey::Help)
                .map(|p| p.phrases[0].clone())
        };
        assert_eq!(help(&first).as_deref(), Some("help"));
        assert_eq!(help(&second).as_deref(), Some("मदद"));
    }

    #[test]
    fn test_missing_base_phrase_marks_set_inert() {
        let mut without_home = TranslationTable::english();
        without_home.remove(&command_key(IntentKey::Home));

        let library = build_library(&default_catalog(), &without_home);
        let home = library.iter().find(|p| p.key == IntentKey::Home).unwrap();
        assert!(home.inert);
        assert_eq!(home.phrases.len(), 5);
        assert!(library
            .iter()
            .filter(|p| p.key != IntentKey::Home)
            .all(|p| !p.inert));
    }
}
