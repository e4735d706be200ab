use std::path::PathBuf;

/// Errors that can occur while talking to a word source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid word API endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("word API request failed: {0}")]
    Transport(#[source] Box<ureq::Error>),

    #[error("failed to read word API response: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode word API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no word available (requested {requested} letters)")]
    NoWordAvailable { requested: usize },
}

impl From<ureq::Error> for SourceError {
    fn from(err: ureq::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Errors that can occur when loading or saving preferences.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("failed to read preferences file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write preferences file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("preferences validation error: {0}")]
    Validation(String),
}
