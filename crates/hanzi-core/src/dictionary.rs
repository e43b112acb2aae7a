use crate::error::SourceError;

/// Remote dictionary provider
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Short name used in logs and resolution origins
    fn name(&self) -> &str;

    /// Fetch a single character, or fail with the reason the source is unusable
    async fn fetch(&self, character: &str) -> Result<RawEntry, SourceError>;
}

/// Entry as delivered by a source, before enrichment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub character: String,
    pub pronunciation: String,
    /// Source-language (English) definition
    pub definition: String,
    pub stroke_count: Option<u32>,
}

impl RawEntry {
    pub fn new(character: &str, pronunciation: &str, definition: &str) -> Self {
        Self {
            character: character.to_string(),
            pronunciation: pronunciation.trim().to_string(),
            definition: definition.trim().to_string(),
            stroke_count: None,
        }
    }

    pub fn with_stroke_count(mut self, stroke_count: u32) -> Self {
        self.stroke_count = Some(stroke_count);
        self
    }

    /// Nothing usable for a worksheet
    pub fn is_empty(&self) -> bool {
        self.pronunciation.is_empty() && self.definition.is_empty()
    }
}
