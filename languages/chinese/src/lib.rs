pub mod hsk;
pub mod loader;
pub mod processor;
pub mod sources;
pub mod tone;
pub mod translator;
pub mod words;

use std::sync::Arc;

use hanzi_config::Config;
use hanzi_core::Resolver;

pub use hsk::HskLevels;
pub use loader::FallbackLoader;
pub use processor::ChineseProcessor;
pub use sources::{JsonCharacterSource, TsvDictionarySource};
pub use tone::extract_tone;
pub use translator::KeywordTranslator;
pub use words::example_words;

/// Resolver wired from config: configured sources, Chinese enrichment, bundled fallback
pub fn build_resolver(config: &Config) -> reqwest::Result<Resolver> {
    let processor = Arc::new(ChineseProcessor::from_config(&config.dictionary));
    let mut resolver = Resolver::new(processor);

    for source in sources::build_sources(config)? {
        resolver = resolver.with_boxed_source(source);
    }

    if config.dictionary.fallback_enabled {
        match FallbackLoader::from_config(&config.dictionary) {
            Ok(table) => resolver = resolver.with_fallback(table),
            Err(e) => tracing::error!("Failed to load fallback table: {}", e),
        }
    } else {
        tracing::warn!("Fallback table disabled");
    }

    Ok(resolver)
}
