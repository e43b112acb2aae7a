use std::path::Path;

use hanzi_config::dictionary::DictionaryConfig;
use hanzi_core::preprocess::Preprocessor;
use hanzi_core::{LanguageProcessor, RawEntry};
use hanzi_translator::Translator;
use hanzi_types::CharacterRecord;

use crate::hsk::HskLevels;
use crate::tone::extract_tone;
use crate::translator::KeywordTranslator;
use crate::words::example_words;

const SOURCE_LANGUAGE: &str = "en";
const LOCAL_LANGUAGE: &str = "de";

/// Chinese language processor
pub struct ChineseProcessor {
    translator: Box<dyn Translator>,
    hsk: HskLevels,
}

impl ChineseProcessor {
    /// Create a processor with the keyword translator and built-in HSK lists
    pub fn new() -> Self {
        Self {
            translator: Box::new(KeywordTranslator::new()),
            hsk: HskLevels::with_defaults(),
        }
    }

    /// Create a processor honouring the dictionary config (custom HSK file)
    pub fn from_config(config: &DictionaryConfig) -> Self {
        let mut processor = Self::new();

        if let Some(path) = &config.hsk_levels_path {
            match HskLevels::load_from_file(Path::new(path)) {
                Ok(levels) => processor.hsk = levels,
                Err(e) => {
                    tracing::warn!("Failed to load HSK levels from {}: {}", path, e);
                    tracing::warn!("Using built-in HSK lists");
                }
            }
        }

        processor
    }

    /// Local-language meaning, or the source definition when nothing translates
    async fn local_meaning(&self, definition: &str) -> String {
        match self
            .translator
            .translate(
                definition,
                SOURCE_LANGUAGE.to_string(),
                LOCAL_LANGUAGE.to_string(),
            )
            .await
        {
            Ok(translation) => {
                tracing::debug!(
                    "'{}' -> '{}' ({})",
                    definition,
                    translation.text,
                    translation.provider
                );
                translation.text
            }
            Err(e) => {
                tracing::debug!("No local meaning for '{}': {}", definition, e);
                definition.to_string()
            }
        }
    }
}

impl Default for ChineseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for ChineseProcessor {}

#[async_trait::async_trait]
impl LanguageProcessor for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    async fn build_record(&self, entry: RawEntry) -> CharacterRecord {
        let meaning_local = self.local_meaning(&entry.definition).await;

        CharacterRecord {
            tone: extract_tone(&entry.pronunciation),
            proficiency_level: self.hsk.level(&entry.character),
            example_words: example_words(&entry.character),
            stroke_count: entry.stroke_count.unwrap_or(0),
            meaning_local,
            meaning_source: entry.definition,
            pronunciation: entry.pronunciation,
            character: entry.character,
        }
    }
}
