//! Error types and handling for the weatherdash application

use thiserror::Error;

/// Main error type for the weatherdash application
#[derive(Error, Debug)]
pub enum WeatherdashError {
    /// Input validation errors, raised before any I/O happens
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The request could not complete at the transport level
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// The upstream service answered with a non-success status
    #[error("Upstream service returned HTTP {status}")]
    Http { status: u16 },

    /// The upstream payload did not match the expected shape
    #[error("Failed to decode upstream response: {message}")]
    Parse { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Location store I/O errors
    #[error("Location store error: {source}")]
    Store {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherdashError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message, suitable for inline panel display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherdashError::Validation { message } => message.clone(),
            WeatherdashError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            WeatherdashError::Http { status } => {
                format!("The weather service returned HTTP {status}. Please try again.")
            }
            WeatherdashError::Parse { .. } => {
                "Received unexpected data from the weather service.".to_string()
            }
            WeatherdashError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherdashError::Store { .. } => {
                "Could not save your location. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let validation_err = WeatherdashError::validation("empty query");
        assert!(matches!(
            validation_err,
            WeatherdashError::Validation { .. }
        ));

        let parse_err = WeatherdashError::parse("missing field");
        assert!(matches!(parse_err, WeatherdashError::Parse { .. }));

        let config_err = WeatherdashError::config("bad base url");
        assert!(matches!(config_err, WeatherdashError::Config { .. }));
    }

    #[test]
    fn test_user_messages() {
        let validation_err = WeatherdashError::validation("Please enter a city name");
        assert_eq!(validation_err.user_message(), "Please enter a city name");

        let http_err = WeatherdashError::Http { status: 500 };
        assert!(http_err.user_message().contains("HTTP 500"));

        let parse_err = WeatherdashError::parse("bad payload");
        assert!(parse_err.user_message().contains("unexpected data"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WeatherdashError = io_err.into();
        assert!(matches!(err, WeatherdashError::Store { .. }));
    }
}
