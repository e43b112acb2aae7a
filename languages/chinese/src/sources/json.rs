use hanzi_core::{DictionarySource, RawEntry, SourceError};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

pub const SOURCE_NAME: &str = "json-endpoint";

const PLACEHOLDER: &str = "{character}";

/// Per-character JSON endpoint, e.g. `https://example.org/hanzi/{character}.json`
#[derive(Clone)]
pub struct JsonCharacterSource {
    client: reqwest::Client,
    url_template: String,
}

#[derive(Debug, Deserialize)]
struct JsonEntry {
    #[serde(default, alias = "pinyin")]
    pronunciation: Option<Pronunciation>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default, alias = "strokes")]
    stroke_count: Option<u32>,
}

/// Some endpoints list every reading, the first one is used
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Pronunciation {
    One(String),
    Many(Vec<String>),
}

impl Pronunciation {
    fn primary(self) -> Option<String> {
        match self {
            Pronunciation::One(p) => Some(p),
            Pronunciation::Many(all) => all.into_iter().next(),
        }
    }
}

impl JsonCharacterSource {
    pub fn new(client: reqwest::Client, url_template: &str) -> Self {
        Self {
            client,
            url_template: url_template.to_string(),
        }
    }

    /// Substitute the character into the template; non-ASCII is percent-encoded by the URL parser
    pub fn url_for(&self, character: &str) -> Result<Url, SourceError> {
        let url = self.url_template.replace(PLACEHOLDER, character);
        Url::parse(&url).map_err(|e| SourceError::Malformed(format!("bad URL '{url}': {e}")))
    }

    /// Decode an endpoint payload into a raw entry
    pub fn parse(character: &str, body: &str) -> Result<RawEntry, SourceError> {
        if body.trim().is_empty() {
            return Err(SourceError::Empty);
        }

        let json: JsonEntry = serde_json::from_str(body)
            .map_err(|e| SourceError::Malformed(format!("Failed to parse response: {e}")))?;

        let pronunciation = json
            .pronunciation
            .and_then(Pronunciation::primary)
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| SourceError::Malformed("No pronunciation in response".to_string()))?;

        let definition = json
            .definition
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| SourceError::Malformed("No definition in response".to_string()))?;

        let entry = RawEntry::new(character, &pronunciation, &definition);
        Ok(match json.stroke_count {
            Some(strokes) => entry.with_stroke_count(strokes),
            None => entry,
        })
    }
}

#[async_trait::async_trait]
impl DictionarySource for JsonCharacterSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self, character: &str) -> Result<RawEntry, SourceError> {
        let url = self.url_for(character)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::NotListed(character.to_string()));
        }

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Self::parse(character, &body)
    }
}
