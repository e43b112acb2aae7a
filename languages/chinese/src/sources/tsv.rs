use std::collections::HashMap;

use hanzi_core::{DictionarySource, RawEntry, SourceError};
use tokio::sync::OnceCell;

pub const SOURCE_NAME: &str = "tsv-dictionary";

/// Whole-document dictionary: one `character\tpinyin\tdefinition` line per entry.
///
/// The document is downloaded on first use and kept for the life of the source.
/// A failed download leaves nothing behind, so the next lookup tries again.
pub struct TsvDictionarySource {
    client: reqwest::Client,
    url: String,
    index: OnceCell<HashMap<String, RawEntry>>,
}

impl TsvDictionarySource {
    pub fn new(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            index: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.index.initialized()
    }

    /// Index a document; incomplete lines are skipped, later duplicates win
    pub fn parse(text: &str) -> HashMap<String, RawEntry> {
        let mut index = HashMap::new();

        for line in text.lines() {
            if !line.contains('\t') {
                continue;
            }

            let mut fields = line.split('\t').map(str::trim);
            let (Some(character), Some(pinyin), Some(definition)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };

            if character.is_empty() || pinyin.is_empty() || definition.is_empty() {
                continue;
            }

            index.insert(
                character.to_string(),
                RawEntry::new(character, pinyin, definition),
            );
        }

        index
    }

    async fn load(&self) -> Result<HashMap<String, RawEntry>, SourceError> {
        tracing::info!("Downloading dictionary document from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        let index = Self::parse(&text);
        if index.is_empty() {
            return Err(SourceError::Empty);
        }

        tracing::info!("Indexed {} dictionary entries", index.len());
        Ok(index)
    }
}

#[async_trait::async_trait]
impl DictionarySource for TsvDictionarySource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self, character: &str) -> Result<RawEntry, SourceError> {
        let index = self.index.get_or_try_init(|| self.load()).await?;

        index
            .get(character)
            .cloned()
            .ok_or_else(|| SourceError::NotListed(character.to_string()))
    }
}
