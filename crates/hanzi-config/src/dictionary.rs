use serde::{Deserialize, Serialize};

pub const MAKE_ME_A_HANZI_URL: &str =
    "https://raw.githubusercontent.com/skishore/makemeahanzi/master/data/dictionary.txt";

fn default_enabled() -> bool {
    true
}

fn default_sources() -> Vec<SourceConfig> {
    vec![SourceConfig::tsv(MAKE_ME_A_HANZI_URL)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Whole dictionary document, one `character\tpinyin\tdefinition` line per entry
    Tsv,
    /// Per-character endpoint, `{character}` in the URL is substituted
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl SourceConfig {
    pub fn tsv(url: &str) -> Self {
        Self {
            kind: SourceKind::Tsv,
            url: url.to_string(),
            enabled: true,
        }
    }

    pub fn json(url_template: &str) -> Self {
        Self {
            kind: SourceKind::Json,
            url: url_template.to_string(),
            enabled: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Remote sources, in priority order
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
    /// Use the bundled fallback table when every source fails
    #[serde(default = "default_enabled")]
    pub fallback_enabled: bool,
    /// Optional `character\ttier` file replacing the built-in HSK lists
    #[serde(default)]
    pub hsk_levels_path: Option<String>,
    /// Optional JSON record file used instead of the bundled fallback table
    #[serde(default)]
    pub fallback_path: Option<String>,
}

impl DictionaryConfig {
    pub fn enabled_sources(&self) -> impl Iterator<Item = &SourceConfig> {
        self.sources.iter().filter(|s| s.enabled)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            fallback_enabled: default_enabled(),
            hsk_levels_path: None,
            fallback_path: None,
        }
    }
}
