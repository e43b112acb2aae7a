/// Failure of a single remote source, recovered inside the resolver
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Malformed payload: {0}")]
    Malformed(String),

    #[error("Empty payload")]
    Empty,

    #[error("Character not listed: {0}")]
    NotListed(String),
}

/// Failure surfaced to the caller of a lookup
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Input is empty")]
    InputInvalid,
}

/// Failure loading bundled or on-disk data tables
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
