use std::collections::HashMap;
use std::path::Path;

use hanzi_core::LoadError;

/// HSK tier provider
pub struct HskLevels {
    levels: HashMap<String, u8>,
    /// Highest configured tier
    tiers: u8,
}

impl HskLevels {
    /// Create empty tier database, every character lands in tier 1
    pub fn new() -> Self {
        Self {
            levels: HashMap::new(),
            tiers: 0,
        }
    }

    /// Create with the built-in HSK 1 character list
    pub fn with_defaults() -> Self {
        let hsk1 = [
            "一", "二", "三", "人", "大", "小", "水", "火", "山", "木", "日", "月", "好", "学",
            "中", "国",
        ];

        Self::from_tiers(&[&hsk1])
    }

    /// Build from ordered tier lists, index 0 being tier 1
    pub fn from_tiers(tiers: &[&[&str]]) -> Self {
        let mut levels = Self::new();
        for (index, characters) in tiers.iter().enumerate() {
            let tier = u8::try_from(index + 1).unwrap_or(u8::MAX);
            for character in characters.iter() {
                levels.insert(character, tier);
            }
        }
        levels
    }

    /// Load tiers from TSV file (character\ttier format, tier as "3" or "HSK3")
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let levels = Self::parse_tsv(&content)?;
        tracing::info!(
            "Loaded {} HSK entries in {} tiers from {}",
            levels.levels.len(),
            levels.tiers,
            path.display()
        );
        Ok(levels)
    }

    pub fn parse_tsv(content: &str) -> Result<Self, LoadError> {
        let mut levels = Self::new();

        for (number, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            let character = parts[0].trim();
            if character.is_empty() {
                return Err(LoadError::InvalidFormat(format!(
                    "line {}: empty character",
                    number + 1
                )));
            }

            let tier = parts.get(1).and_then(|t| parse_tier(t)).ok_or_else(|| {
                LoadError::InvalidFormat(format!("line {}: expected character\\ttier", number + 1))
            })?;
            levels.insert(character, tier);
        }

        Ok(levels)
    }

    /// Lowest tier wins when a character is listed more than once
    fn insert(&mut self, character: &str, tier: u8) {
        let entry = self.levels.entry(character.to_string()).or_insert(tier);
        *entry = (*entry).min(tier);
        self.tiers = self.tiers.max(tier);
    }

    /// Listed tier, if any
    pub fn get_level(&self, character: &str) -> Option<u8> {
        self.levels.get(character).copied()
    }

    /// Listed tier, or the tier after the last configured one
    pub fn level(&self, character: &str) -> u8 {
        self.get_level(character)
            .unwrap_or_else(|| self.default_level())
    }

    pub fn default_level(&self) -> u8 {
        self.tiers.saturating_add(1)
    }
}

impl Default for HskLevels {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn parse_tier(s: &str) -> Option<u8> {
    let s = s.trim();
    let digits = s
        .strip_prefix("HSK")
        .or_else(|| s.strip_prefix("hsk"))
        .unwrap_or(s)
        .trim();
    digits.parse().ok().filter(|tier| *tier > 0)
}
