//! Error types for the coordq crate

use thiserror::Error;

/// Main error type for the coordq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("a coordination chain needs at least three agents, got {agents}")]
    TooFewAgents { agents: usize },

    #[error("reward rate {rate} must be positive and finite")]
    InvalidRewardRate { rate: f64 },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
