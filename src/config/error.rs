//! Configuration error types.

use thiserror::Error;

/// Errors raised while reading options from TOML.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let toml_err = toml::from_str::<toml::Table>("[broken").unwrap_err();
        let display = format!("{}", ConfigError::from(toml_err));
        assert!(display.starts_with("Config parsing error"));
    }
}
