use unicode_normalization::UnicodeNormalization;

/// Neutral tone, also used when the pronunciation carries no tone mark
pub const NEUTRAL_TONE: u8 = 0;

/// Tone number (1-4) of the first tone-marked vowel in a pinyin string.
///
/// Only the first mark counts; a multi-syllable string like "xuéshēng" yields 2.
pub fn extract_tone(pronunciation: &str) -> u8 {
    pronunciation
        .nfc()
        .find_map(tone_mark)
        .unwrap_or(NEUTRAL_TONE)
}

/// Tone carried by a single precomposed pinyin vowel
fn tone_mark(c: char) -> Option<u8> {
    let tone = match c {
        'ā' | 'ē' | 'ī' | 'ō' | 'ū' | 'ǖ' | 'Ā' | 'Ē' | 'Ī' | 'Ō' | 'Ū' | 'Ǖ' => 1,
        // bare diaeresis is read as first tone
        'ü' | 'Ü' => 1,
        'á' | 'é' | 'í' | 'ó' | 'ú' | 'ǘ' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ǘ' => 2,
        'ǎ' | 'ě' | 'ǐ' | 'ǒ' | 'ǔ' | 'ǚ' | 'Ǎ' | 'Ě' | 'Ǐ' | 'Ǒ' | 'Ǔ' | 'Ǚ' => 3,
        'à' | 'è' | 'ì' | 'ò' | 'ù' | 'ǜ' | 'À' | 'È' | 'Ì' | 'Ò' | 'Ù' | 'Ǜ' => 4,
        _ => return None,
    };
    Some(tone)
}
