use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request URL could not be built; nothing was sent.
    RequestConstruction,
    /// The HTTP exchange itself failed.
    Transport,
    /// The response body did not match the expected schema.
    Decode,
}

/// Errors produced while looking up weather for a single query.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Could not build weather request: {0}")]
    RequestConstruction(String),

    #[error("Weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather service responded with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Weather response contained no condition entries")]
    MissingCondition,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::RequestConstruction(_) => ErrorKind::RequestConstruction,
            WeatherError::Transport(_) | WeatherError::Status { .. } => ErrorKind::Transport,
            WeatherError::Decode(_) | WeatherError::MissingCondition => ErrorKind::Decode,
        }
    }
}
