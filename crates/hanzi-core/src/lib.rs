pub mod cache;
pub mod dictionary;
pub mod error;
pub mod fallback;
pub mod language;
pub mod preprocess;
pub mod resolver;
pub mod worksheet;

pub use dictionary::{DictionarySource, RawEntry};
pub use error::{LoadError, LookupError, SourceError};
pub use fallback::FallbackTable;
pub use language::LanguageProcessor;
pub use resolver::{Resolved, Resolver};

#[cfg(test)]
mod tests;
