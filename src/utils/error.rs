use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragranceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FragranceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FragranceError::IoError(_) => {
                "Check that the address is free and the config file is readable"
            }
            FragranceError::ConfigError { .. } | FragranceError::ConfigValidationError { .. } => {
                "Fix the configuration file syntax and try again"
            }
            FragranceError::MissingConfigError { .. } => {
                "Provide the missing value via CLI flag or config file"
            }
            FragranceError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value and restart the server"
            }
        }
    }
}

/// Failure of a single compound lookup. Rendered inline on the search page,
/// so the `Display` text is what the user reads.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No compound data found.")]
    NotFound,

    #[error("PubChem request failed: {status}")]
    UpstreamFailure { status: u16 },

    #[error("Error fetching from PubChem: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Unexpected response from PubChem: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl LookupError {
    pub fn category(&self) -> &'static str {
        match self {
            LookupError::NotFound => "not_found",
            LookupError::UpstreamFailure { .. } => "upstream_failure",
            LookupError::TransportError(_) => "transport",
            LookupError::ParseError(_) => "parse",
        }
    }
}

pub type Result<T> = std::result::Result<T, FragranceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_failure_message_embeds_status() {
        let err = LookupError::UpstreamFailure { status: 503 };
        assert_eq!(err.to_string(), "PubChem request failed: 503");
        assert_eq!(err.category(), "upstream_failure");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(LookupError::NotFound.to_string(), "No compound data found.");
    }

    #[test]
    fn test_parse_error_wraps_serde_message() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = LookupError::from(serde_err);
        assert!(err
            .to_string()
            .starts_with("Unexpected response from PubChem: "));
        assert_eq!(err.category(), "parse");
    }
}
