use async_trait::async_trait;
use hanzi_translator::{LanguageCode, TranslateError, Translation, Translator};

/// English keyword to German term, checked in order
const KEYWORDS: &[(&str, &str)] = &[
    ("water", "Wasser"),
    ("fire", "Feuer"),
    ("mountain", "Berg"),
    ("tree", "Baum"),
    ("person", "Person"),
    ("big", "groß"),
    ("small", "klein"),
    ("sun", "Sonne"),
    ("moon", "Mond"),
    ("earth", "Erde"),
    ("gold", "Gold"),
    ("wood", "Holz"),
    ("metal", "Metall"),
    ("hand", "Hand"),
    ("car", "Auto"),
    ("good", "gut"),
    ("learn", "lernen"),
    ("study", "studieren"),
];

/// Best-effort English to German gloss by keyword substring match.
///
/// Not a translation engine: "scar" matches "car", and anything outside the
/// table yields `NoMatch`.
#[derive(Clone, Default)]
pub struct KeywordTranslator;

impl KeywordTranslator {
    pub fn new() -> Self {
        Self
    }

    /// First table term whose keyword occurs in the definition, ignoring case
    pub fn lookup(&self, definition: &str) -> Option<&'static str> {
        let definition = definition.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| definition.contains(keyword))
            .map(|(_, term)| *term)
    }
}

#[async_trait]
impl Translator for KeywordTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if !self.supports(&from, &to) {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        let term = self.lookup(text).ok_or(TranslateError::NoMatch)?;

        Ok(Translation {
            text: term.to_string(),
            from,
            to,
            provider: "keywords".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![("en".to_string(), "de".to_string())]
    }
}
