use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("SPARQL request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("SPARQL endpoint returned status {status}")]
    StatusError { status: u16 },

    #[error("Malformed SPARQL response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MapError {
    /// Fetch-cycle errors are recoverable: the engine logs them and renders
    /// from the unchanged store. Everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MapError::HttpError(_) | MapError::StatusError { .. } | MapError::MalformedResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
