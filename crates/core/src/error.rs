//! Error type shared by the core modules

/// Standard result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Admin token must not be empty")]
    EmptyToken,
}

impl Error {
    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::storage("quota exceeded").to_string(),
            "Storage error: quota exceeded"
        );
        assert_eq!(
            Error::invalid_config("login_path is not a known route").to_string(),
            "Invalid configuration: login_path is not a known route"
        );
        assert_eq!(
            Error::EmptyToken.to_string(),
            "Admin token must not be empty"
        );
    }
}
