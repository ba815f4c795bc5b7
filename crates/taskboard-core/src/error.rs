/*
[INPUT]:  Error sources (filesystem, serialization, label parsing)
[OUTPUT]: Structured error types for the core crate
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Errors raised while reading or writing persisted state
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem access failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Atomic rename of the temporary file failed
    #[error("Temporary file error: {0}")]
    TempFile(#[from] tempfile::PersistError),

    /// No per-user data directory on this platform
    #[error("Could not determine data directory")]
    DataDirUnavailable,

    /// Key cannot be mapped to a file name
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// A label did not match any variant of an enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::InvalidKey("../x".to_string()).to_string(),
            "Invalid storage key: ../x"
        );
        let err = ParseLabelError {
            kind: "Area",
            value: "garden".to_string(),
        };
        assert_eq!(err.to_string(), "invalid Area: 'garden'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
