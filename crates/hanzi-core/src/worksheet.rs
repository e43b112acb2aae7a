use hanzi_config::worksheet::WorksheetConfig;
use hanzi_types::{CharacterRecord, Origin, PracticeCell, Worksheet};

const UNKNOWN_STROKES: &str = "unknown";

/// Lay out a practice sheet: one reference cell, `faded_cells` traced cells, the rest blank
pub fn build_worksheet(
    record: &CharacterRecord,
    origin: Origin,
    config: &WorksheetConfig,
) -> Worksheet {
    let stroke_label = if record.has_stroke_count() {
        record.stroke_count.to_string()
    } else {
        UNKNOWN_STROKES.to_string()
    };

    Worksheet {
        character: record.character.clone(),
        pronunciation: record.pronunciation.clone(),
        tone: record.tone,
        meaning_local: record.meaning_local.clone(),
        meaning_source: record.meaning_source.clone(),
        stroke_label,
        proficiency_label: format!("HSK {}", record.proficiency_level),
        grid: practice_grid(&record.character, config),
        words: record.example_words.clone(),
        origin,
    }
}

fn practice_grid(glyph: &str, config: &WorksheetConfig) -> Vec<PracticeCell> {
    (0..config.grid_cells)
        .map(|i| match i {
            0 => PracticeCell::Reference {
                glyph: glyph.to_string(),
            },
            i if i <= config.faded_cells => PracticeCell::Faded {
                glyph: glyph.to_string(),
                level: u8::try_from(i).unwrap_or(u8::MAX),
            },
            _ => PracticeCell::Blank,
        })
        .collect()
}
