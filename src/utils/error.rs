use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("No data returned from backend")]
    EmptyResponse,

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl FinderError {
    pub fn config(message: impl Into<String>) -> Self {
        FinderError::Config {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        FinderError::Validation {
            message: message.into(),
        }
    }

    /// Message shown to the end user. Everything except a configuration
    /// problem collapses into one generic message; callers branch on the
    /// variant, never on message text.
    pub fn user_friendly_message(&self) -> String {
        match self {
            // Config covers more than a missing key (bad api_base, blank
            // description), so the concrete cause is passed through.
            FinderError::Config { message } => {
                format!("API configuration error: {}", message)
            }
            FinderError::Transport(_)
            | FinderError::EmptyResponse
            | FinderError::Validation { .. } => {
                "Failed to generate keywords. Please try again or check your internet connection."
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_message_carries_the_cause() {
        let missing_key = FinderError::config("API key is not configured");
        assert_eq!(
            missing_key.user_friendly_message(),
            "API configuration error: API key is not configured"
        );

        let bad_base = FinderError::config("api_base: invalid URL format: relative URL");
        assert!(bad_base
            .user_friendly_message()
            .contains("api_base: invalid URL format"));
    }

    #[test]
    fn test_other_variants_collapse_to_generic_message() {
        let generic =
            "Failed to generate keywords. Please try again or check your internet connection.";
        assert_eq!(FinderError::EmptyResponse.user_friendly_message(), generic);
        assert_eq!(
            FinderError::validation("truncated").user_friendly_message(),
            generic
        );
    }
}
