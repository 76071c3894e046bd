use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a directory read.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach user directory: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("user directory returned status {status}")]
    Status { status: StatusCode },
    #[error("malformed user directory payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown id strategy '{0}' (expected 'monotonic' or 'length-plus-one')")]
pub struct ParseIdStrategyError(pub String);
