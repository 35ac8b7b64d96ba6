use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Persistent storage is not available: {0}")]
    Unavailable(String),
    #[error("Failed to read key {key:?} from storage: {reason}")]
    Read { key: String, reason: String },
    #[error("Failed to write key {key:?} to storage: {reason}")]
    Write { key: String, reason: String },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
