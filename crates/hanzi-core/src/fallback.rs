use std::collections::HashMap;
use std::sync::Arc;

use hanzi_types::CharacterRecord;

use crate::error::LoadError;

/// Static character table consulted when every remote source fails
#[derive(Debug, Default, Clone)]
pub struct FallbackTable {
    records: HashMap<String, Arc<CharacterRecord>>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.character.clone(), Arc::new(r)))
                .collect(),
        }
    }

    /// Parse a JSON array of records; later duplicates override earlier ones
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let records: Vec<CharacterRecord> = serde_json::from_str(json)?;

        if let Some(blank) = records.iter().position(|r| r.character.trim().is_empty()) {
            return Err(LoadError::InvalidFormat(format!(
                "record {blank} has an empty character"
            )));
        }

        Ok(Self::from_records(records))
    }

    pub fn get(&self, character: &str) -> Option<Arc<CharacterRecord>> {
        self.records.get(character).cloned()
    }

    pub fn contains(&self, character: &str) -> bool {
        self.records.contains_key(character)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
