//! Translation records and the supported-language catalog

use serde::{Deserialize, Serialize};

/// Per-language translation state attached to a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationInfo {
    /// ISO 639-1 language code
    pub language: String,

    /// Display name of the language
    pub language_name: String,

    /// Flag glyph shown next to the name
    pub flag: String,

    /// Completion percentage in [0, 100]
    pub progress: f32,

    /// Whether the translation finished; implies progress == 100
    pub is_complete: bool,
}

impl TranslationInfo {
    /// Create a record for a catalog language at the given progress
    pub fn new(language: &Language, progress: f32, is_complete: bool) -> Self {
        Self {
            language: language.code.to_string(),
            language_name: language.name.to_string(),
            flag: language.flag.to_string(),
            progress,
            is_complete,
        }
    }

    /// A translation counts as partial while underway but unfinished
    pub fn is_partial(&self) -> bool {
        self.progress > 0.0 && !self.is_complete
    }
}

/// A language the translation service can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code
    pub code: &'static str,

    /// Display name (Portuguese, matching the product locale)
    pub name: &'static str,

    /// Flag glyph
    pub flag: &'static str,
}

/// The fixed set of target languages offered for translation
pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "Inglês", flag: "\u{1F1FA}\u{1F1F8}" },
    Language { code: "es", name: "Espanhol", flag: "\u{1F1EA}\u{1F1F8}" },
    Language { code: "fr", name: "Francês", flag: "\u{1F1EB}\u{1F1F7}" },
    Language { code: "de", name: "Alemão", flag: "\u{1F1E9}\u{1F1EA}" },
    Language { code: "it", name: "Italiano", flag: "\u{1F1EE}\u{1F1F9}" },
    Language { code: "ja", name: "Japonês", flag: "\u{1F1EF}\u{1F1F5}" },
    Language { code: "ko", name: "Coreano", flag: "\u{1F1F0}\u{1F1F7}" },
    Language { code: "zh", name: "Chinês", flag: "\u{1F1E8}\u{1F1F3}" },
    Language { code: "ru", name: "Russo", flag: "\u{1F1F7}\u{1F1FA}" },
    Language { code: "ar", name: "Árabe", flag: "\u{1F1F8}\u{1F1E6}" },
];

impl Language {
    /// Look up a catalog language by its code
    pub fn by_code(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|l| l.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let fr = Language::by_code("fr").unwrap();
        assert_eq!(fr.name, "Francês");
        assert!(Language::by_code("tlh").is_none());
    }

    #[test]
    fn test_catalog_codes_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_partial_classification() {
        let en = Language::by_code("en").unwrap();
        assert!(TranslationInfo::new(en, 75.0, false).is_partial());
        assert!(!TranslationInfo::new(en, 0.0, false).is_partial());
        assert!(!TranslationInfo::new(en, 100.0, true).is_partial());
    }
}
