//! Error types for multicombo.
//!
//! Only configuration and color parsing can fail recoverably. Exceeding the
//! selection limit is not an error, and an out-of-range row passed to a
//! toggle is a programming error that panics.

use std::path::PathBuf;

/// Result type alias for multicombo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a control.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color string that is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid color '{value}'")]
    InvalidColor { value: String },

    /// A configuration value outside its accepted range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a configuration value error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::invalid_color("#12").to_string(),
            "Invalid color '#12'"
        );
        assert_eq!(
            Error::invalid_config("max_visible_items", "must be at least 1").to_string(),
            "Invalid value for 'max_visible_items': must be at least 1"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let err = Error::io(
            "combo.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("combo.toml"));
    }
}
