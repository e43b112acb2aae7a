use serde::{Deserialize, Serialize};

/// Fully resolved metadata for a single character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub character: String,
    /// Pinyin, possibly carrying tone marks
    pub pronunciation: String,
    /// 1-4, 0 for neutral or unknown
    #[serde(default)]
    pub tone: u8,
    /// Meaning in the learner's language (German)
    pub meaning_local: String,
    /// Meaning as delivered by the dictionary (English)
    pub meaning_source: String,
    /// 0 = unknown
    #[serde(default)]
    pub stroke_count: u32,
    #[serde(default = "default_proficiency_level")]
    pub proficiency_level: u8,
    #[serde(default)]
    pub example_words: Vec<ExampleWord>,
}

fn default_proficiency_level() -> u8 {
    1
}

impl CharacterRecord {
    pub fn has_stroke_count(&self) -> bool {
        self.stroke_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleWord {
    pub word: String,
    #[serde(default)]
    pub pronunciation: String,
    pub meaning_local: String,
    /// Placeholder compound with no real linguistic meaning
    #[serde(default)]
    pub synthetic: bool,
}

impl ExampleWord {
    pub fn curated(word: &str, pronunciation: &str, meaning_local: &str) -> Self {
        Self {
            word: word.to_string(),
            pronunciation: pronunciation.to_string(),
            meaning_local: meaning_local.to_string(),
            synthetic: false,
        }
    }

    pub fn placeholder(word: String, meaning_local: String) -> Self {
        Self {
            word,
            pronunciation: String::new(),
            meaning_local,
            synthetic: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{
            "character": "水",
            "pronunciation": "shuǐ",
            "meaning_local": "Wasser",
            "meaning_source": "water"
        }"#;

        let record: CharacterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tone, 0);
        assert_eq!(record.stroke_count, 0);
        assert!(!record.has_stroke_count());
        assert_eq!(record.proficiency_level, 1);
        assert!(record.example_words.is_empty());
    }

    #[test]
    fn placeholder_words_are_flagged() {
        let word = ExampleWord::placeholder("龘子".to_string(), "Beispielwort 1".to_string());
        assert!(word.synthetic);
        assert!(word.pronunciation.is_empty());
        assert!(!ExampleWord::curated("学生", "xuéshēng", "Student").synthetic);
    }
}
