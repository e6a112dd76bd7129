use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("{0}")]
    Validation(String),

    #[error("Contact '{0}' does not exist in the contact book!")]
    ContactNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl RoloError {
    /// Per-command errors are recoverable: the REPL reports them and keeps
    /// going. Storage failures leave no book to keep going with.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RoloError::Io(_) | RoloError::Serialization(_) | RoloError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RoloError>;
