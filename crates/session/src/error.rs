use thiserror::Error;

use schoolhub_auth::{AuthzError, Role};

/// Failure of the client-local key/value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to resolve storage location: {0}")]
    DataDir(String),
}

/// Session operation failure.
///
/// Every variant is local and recoverable; failed operations leave the
/// session state as it was.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Unknown email or wrong secret. Deliberately does not say which.
    #[error("invalid credentials")]
    Authentication,

    #[error(transparent)]
    Authorization(#[from] AuthzError),

    #[error("no registered principal for role '{0}'")]
    NoPrincipalForRole(Role),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
