use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::ExampleWord;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Generate trigger, carries the raw text entry
    Generate(String),
    ShowWorksheet(Box<Worksheet>),
    StatusUpdate(Status),
    /// Input surface closed, no more triggers will arrive
    InputClosed,
}

/// Where a resolved record came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Origin {
    Cache,
    Source(String),
    Fallback,
}

/// Human-readable status shown next to the text entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    EmptyInput,
    NotFound(String),
    LoadFailed,
    Ready(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Loading => write!(f, "Zeichen wird geladen..."),
            Status::EmptyInput => write!(f, "Bitte geben Sie ein Zeichen ein."),
            Status::NotFound(character) => {
                write!(f, "Keine Daten für Zeichen \"{character}\" gefunden.")
            }
            Status::LoadFailed => write!(f, "Fehler beim Laden der Daten."),
            Status::Ready(character) => write!(f, "Arbeitsblatt für \"{character}\" erstellt."),
        }
    }
}

/// Presentation-neutral practice sheet for one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    pub character: String,
    pub pronunciation: String,
    pub tone: u8,
    pub meaning_local: String,
    pub meaning_source: String,
    /// Stroke count, or "unknown"
    pub stroke_label: String,
    pub proficiency_label: String,
    pub grid: Vec<PracticeCell>,
    pub words: Vec<ExampleWord>,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PracticeCell {
    Reference { glyph: String },
    /// Higher level = lighter trace
    Faded { glyph: String, level: u8 },
    Blank,
}
