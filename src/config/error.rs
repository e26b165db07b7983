//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("lexsite.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("lexsite.toml"));

        let validation_err = ConfigError::Validation("[form.endpoint] is empty".to_string());
        assert!(format!("{validation_err}").contains("[form.endpoint] is empty"));
    }

    #[test]
    fn test_toml_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("[base").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
