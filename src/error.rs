use reqwest::StatusCode;

/// Everything that can abort a sync run. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Token request was rejected ({status}): {body}")]
    Auth { status: StatusCode, body: String },
    #[error("Catalog request to {url} failed ({status}): {body}")]
    Api {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("Failed to send http request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Unexpected response shape: {0}")]
    Decode(String),
    #[error("Unknown release date format: {0:?}")]
    DateFormat(String),
    #[error("Cache write failed: {0}")]
    Cache(#[from] sea_orm::DbErr),
    #[error("Page producer task failed: {0}")]
    Producer(#[from] tokio::task::JoinError),
}

impl From<serde_json::Error> for SyncError {
    fn from(error: serde_json::Error) -> Self {
        SyncError::Decode(error.to_string())
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(error: reqwest::Error) -> Self {
        // reqwest reports a body that doesn't match the target type as a decode error
        if error.is_decode() {
            SyncError::Decode(error.to_string())
        } else {
            SyncError::Transport(error)
        }
    }
}

pub type Result<T, E = SyncError> = std::result::Result<T, E>;
