use std::sync::Arc;

use hanzi_types::{CharacterRecord, Origin};

use crate::cache::RecordCache;
use crate::dictionary::DictionarySource;
use crate::error::{LookupError, SourceError};
use crate::fallback::FallbackTable;
use crate::language::LanguageProcessor;
use crate::preprocess::Preprocessor;

/// A successful lookup
#[derive(Debug, Clone)]
pub struct Resolved {
    pub record: Arc<CharacterRecord>,
    pub origin: Origin,
}

/// Layered character lookup: cache, remote sources in priority order, fallback table
pub struct Resolver {
    processor: Arc<dyn LanguageProcessor>,
    sources: Vec<Box<dyn DictionarySource>>,
    fallback: FallbackTable,
    pub(crate) cache: RecordCache,
}

impl Resolver {
    pub fn new(processor: Arc<dyn LanguageProcessor>) -> Self {
        Self {
            processor,
            sources: Vec::new(),
            fallback: FallbackTable::new(),
            cache: RecordCache::new(),
        }
    }

    /// Append a source; earlier sources take priority
    pub fn with_source(mut self, source: impl DictionarySource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with_boxed_source(mut self, source: Box<dyn DictionarySource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackTable) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub async fn cached(&self, character: &str) -> Option<Arc<CharacterRecord>> {
        self.cache.get(character).await
    }

    pub async fn cache_len(&self) -> usize {
        self.cache.len().await
    }

    /// Resolve user input to a record. `Ok(None)` means no source knows the character.
    pub async fn resolve(&self, input: &str) -> Result<Option<Resolved>, LookupError> {
        let character = self.processor.prepare(input)?;

        if let Some(record) = self.cache.get(&character).await {
            tracing::debug!("Cache hit for '{}'", character);
            return Ok(Some(Resolved {
                record,
                origin: Origin::Cache,
            }));
        }

        let key_lock = self.cache.key_lock(&character);
        let _guard = key_lock.acquire().await;

        Ok(self.resolve_uncached(&character).await)
    }

    async fn resolve_uncached(&self, character: &str) -> Option<Resolved> {
        // A concurrent lookup may have filled the cache while we waited
        if let Some(record) = self.cache.get(character).await {
            return Some(Resolved {
                record,
                origin: Origin::Cache,
            });
        }

        for source in &self.sources {
            let result = match source.fetch(character).await {
                Ok(entry) if entry.is_empty() => Err(SourceError::Empty),
                other => other,
            };

            match result {
                Ok(entry) => {
                    tracing::debug!("'{}' resolved by {}", character, source.name());
                    let record = self.processor.build_record(entry).await;
                    let record = self.cache.insert(record).await;
                    return Some(Resolved {
                        record,
                        origin: Origin::Source(source.name().to_string()),
                    });
                }
                Err(SourceError::NotListed(_)) => {
                    tracing::debug!("{} does not list '{}'", source.name(), character);
                }
                Err(e) => {
                    tracing::warn!("Source {} unavailable for '{}': {}", source.name(), character, e);
                }
            }
        }

        if let Some(record) = self.fallback.get(character) {
            tracing::info!("'{}' served from fallback table", character);
            return Some(Resolved {
                record,
                origin: Origin::Fallback,
            });
        }

        tracing::debug!("'{}' not found in any source", character);
        None
    }
}
