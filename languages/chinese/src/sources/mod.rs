use hanzi_config::Config;
use hanzi_config::dictionary::SourceKind;
use hanzi_config::network::NetworkConfig;
use hanzi_core::DictionarySource;

pub mod json;
pub mod tsv;

pub use json::JsonCharacterSource;
pub use tsv::TsvDictionarySource;

/// Shared HTTP client for every remote source
pub fn http_client(config: &NetworkConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Enabled sources from config, in priority order
pub fn build_sources(config: &Config) -> reqwest::Result<Vec<Box<dyn DictionarySource>>> {
    let client = http_client(&config.network)?;

    let sources = config
        .dictionary
        .enabled_sources()
        .map(|source| -> Box<dyn DictionarySource> {
            tracing::info!("Using {:?} source at {}", source.kind, source.url);
            match source.kind {
                SourceKind::Tsv => Box::new(TsvDictionarySource::new(client.clone(), &source.url)),
                SourceKind::Json => {
                    Box::new(JsonCharacterSource::new(client.clone(), &source.url))
                }
            }
        })
        .collect();

    Ok(sources)
}
