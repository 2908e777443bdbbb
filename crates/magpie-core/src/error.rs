//! Vault Error Types
//!
//! Error taxonomy for host interactions. Per-note read failures are
//! recovered inside the pipeline and never surface; only frontmatter
//! transaction failures are allowed to reach the caller.

use thiserror::Error;

/// Error type for vault and prompt operations
#[derive(Error, Debug, Clone)]
pub enum VaultError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Frontmatter error: {0}")]
    Frontmatter(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

/// Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;

impl VaultError {
    /// Create an I/O error
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Self::Io(msg.into())
    }

    /// Create a frontmatter error
    pub fn frontmatter<S: Into<String>>(msg: S) -> Self {
        Self::Frontmatter(msg.into())
    }

    /// Create a prompt error
    pub fn prompt<S: Into<String>>(msg: S) -> Self {
        Self::Prompt(msg.into())
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for VaultError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Frontmatter(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let err: VaultError = std::io::Error::other("boom").into();

        assert!(matches!(err, VaultError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn yaml_error_maps_to_frontmatter() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Mapping>("[not, a, mapping]").unwrap_err();
        let err: VaultError = yaml_err.into();

        assert!(matches!(err, VaultError::Frontmatter(_)));
    }
}
