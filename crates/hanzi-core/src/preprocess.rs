use unicode_normalization::UnicodeNormalization;

use crate::error::LookupError;

pub trait Preprocessor {
    // Default CJK preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // NFC keeps composed pinyin vowels and folds CJK compatibility ideographs
        text = text.nfc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }

    /// Process and reject input that ends up empty
    fn prepare(&self, text: &str) -> Result<String, LookupError> {
        let processed = self.process(text);
        if processed.is_empty() {
            return Err(LookupError::InputInvalid);
        }
        Ok(processed)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
