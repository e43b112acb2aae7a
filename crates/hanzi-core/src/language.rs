use hanzi_types::CharacterRecord;

use crate::dictionary::RawEntry;
use crate::preprocess::Preprocessor;

/// Input normalization and record enrichment for a language implementation
#[async_trait::async_trait]
pub trait LanguageProcessor: Preprocessor + Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", ...)
    fn language_code(&self) -> &str;

    /// Turn a raw source entry into a complete record
    async fn build_record(&self, entry: RawEntry) -> CharacterRecord;
}
