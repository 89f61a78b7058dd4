use thiserror::Error;

/// Failures of the rentals synchronizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Transport failure, unexpected status on a read, or a body that
    /// does not decode
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status from the accommodation update endpoint
    #[error("HTTP error status: {0}")]
    HttpStatus(u16),
}
