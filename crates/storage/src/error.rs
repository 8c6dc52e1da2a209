use engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<StorageError> for EngineError {
    fn from(value: StorageError) -> Self {
        EngineError::Persistence(value.to_string())
    }
}
