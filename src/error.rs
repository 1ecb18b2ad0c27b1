use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },
    #[error("Backend rejected refresh: {0}")]
    RefreshRejected(String),
    #[error("A refresh is already in progress")]
    RefreshInProgress,
    #[error("No entity named '{0}' on the leaderboard")]
    EntityNotFound(String),
    #[error("Invalid sort criterion: {0}")]
    InvalidCriterion(String),
    #[error("{0}")]
    Other(String),
}

impl BoardError {
    /// Failures worth retrying: transport errors, 5xx and 429 responses.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
