use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to send request to {url}: {reason}")]
    Transport { url: String, reason: String },
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("Failed to parse response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("Invalid resource locator: {0:?}")]
    InvalidLocator(String),
    // Searching for "error" deliberately trips the failure boundary so the fallback
    // screen can be exercised end to end.
    #[error("Error triggered for testing.")]
    Triggered,
}
