pub mod record;
pub mod types;

pub use record::{CharacterRecord, ExampleWord};
pub use types::{AppEvent, Origin, PracticeCell, Status, Worksheet};
