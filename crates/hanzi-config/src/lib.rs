use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::{DictionaryConfig, SourceConfig, SourceKind};
use self::network::NetworkConfig;
use self::worksheet::WorksheetConfig;

pub mod dictionary;
pub mod network;
pub mod worksheet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,
    pub worksheet: WorksheetConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the process environment in `new`)
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var("HANZI_TSV_URL") {
            match self
                .dictionary
                .sources
                .iter_mut()
                .find(|s| s.kind == SourceKind::Tsv)
            {
                Some(source) => source.url = url,
                None => self.dictionary.sources.push(SourceConfig::tsv(&url)),
            }
        }

        if let Some(template) = var("HANZI_JSON_URL") {
            self.dictionary.sources.push(SourceConfig::json(&template));
        }

        if let Some(timeout) = var("TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.network.timeout_seconds = timeout;
        }

        if let Some(cells) = var("GRID_CELLS").and_then(|v| v.parse().ok()) {
            self.worksheet.grid_cells = cells;
        }

        if let Some(path) = var("HSK_LEVELS_PATH") {
            self.dictionary.hsk_levels_path = Some(path);
        }

        if let Some(path) = var("FALLBACK_PATH") {
            self.dictionary.fallback_path = Some(path);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::dictionary::MAKE_ME_A_HANZI_URL;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.dictionary.sources.len(), 1);
        assert_eq!(config.dictionary.sources[0].url, MAKE_ME_A_HANZI_URL);
        assert!(config.dictionary.fallback_enabled);
        assert_eq!(config.network.timeout_seconds, 0);
        assert!(config.network.timeout().is_none());
        assert!(config.dictionary.fallback_path.is_none());
        assert_eq!(config.worksheet.grid_cells, 20);
        assert_eq!(config.worksheet.faded_cells, 3);
    }

    #[test]
    fn overrides_replace_tsv_url_and_append_json_source() {
        let config = Config::default().with_overrides(lookup(&[
            ("HANZI_TSV_URL", "http://localhost:9000/dict.txt"),
            ("HANZI_JSON_URL", "http://localhost:9001/char/{character}"),
            ("TIMEOUT_SECONDS", "5"),
            ("GRID_CELLS", "not a number"),
            ("FALLBACK_PATH", "/srv/hanzi/fallback.json"),
        ]));

        let sources: Vec<_> = config.dictionary.enabled_sources().collect();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].kind, SourceKind::Tsv);
        assert_eq!(sources[0].url, "http://localhost:9000/dict.txt");
        assert_eq!(sources[1].kind, SourceKind::Json);
        assert_eq!(config.network.timeout_seconds, 5);
        assert_eq!(config.worksheet.grid_cells, 20);
        assert_eq!(
            config.dictionary.fallback_path.as_deref(),
            Some("/srv/hanzi/fallback.json")
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "dictionary": {
                "sources": [
                    { "kind": "json", "url": "http://example.test/{character}" },
                    { "kind": "tsv", "url": "http://example.test/all.txt", "enabled": false }
                ]
            },
            "network": { "timeout_seconds": 0 }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        let enabled: Vec<_> = config.dictionary.enabled_sources().collect();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].kind, SourceKind::Json);
        assert!(config.network.timeout().is_none());
        assert!(config.dictionary.fallback_enabled);
        assert_eq!(config.worksheet.faded_cells, 3);
    }
}
