//! Admin error types.

use humanbench_core::storage::StoreError;
use thiserror::Error;

/// Result type alias for admin commands.
pub type Result<T> = std::result::Result<T, AdminError>;

/// Errors that can occur while running an admin command.
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Verification failed: {path} not found after write")]
    VerificationFailed { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_error_display() {
        let err: AdminError = StoreError::QueryFailed("Table not found".to_string()).into();
        assert_eq!(err.to_string(), "Storage error: Query failed: Table not found");

        let err = AdminError::VerificationFailed {
            path: "web_settings/main".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Verification failed: web_settings/main not found after write"
        );
    }
}
