use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for MarkError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                MarkError::NotFound("record not found".to_string())
            }
            other => MarkError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MarkError>;
