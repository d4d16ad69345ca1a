//! Application error types for the check.
//!
//! Every error that reaches the outermost boundary of the check is reported
//! to the runner through its `Display` text, so the messages here are the
//! ones users see in the job log.

use thiserror::Error;

/// Failure message when the reviewers file cannot be read.
pub const REVIEWERS_FILE_UNREADABLE: &str = "REVIEWERS file not found or unreadable.";

/// Failure message when the reviewers file is blank after trimming.
pub const REVIEWERS_FILE_EMPTY: &str = "REVIEWERS file is empty.";

/// Why the reviewers file could not provide a required reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewersFileProblem {
    Unreadable,
    Empty,
}

impl std::fmt::Display for ReviewersFileProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable => f.write_str(REVIEWERS_FILE_UNREADABLE),
            Self::Empty => f.write_str(REVIEWERS_FILE_EMPTY),
        }
    }
}

/// Application-level errors raised while running the check.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reviewers file is missing, unreadable, or blank.
    #[error("{problem}")]
    ReviewersFile { problem: ReviewersFileProblem },

    /// A required action input was not supplied.
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },

    /// An action input could not be interpreted.
    #[error("{message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// The workflow run context is incomplete or malformed.
    #[error("{message}")]
    Context { message: String },

    /// GitHub API request failed.
    #[error("GitHub API error: {message}")]
    GitHubApi {
        message: String,
        status_code: Option<u16>,
        endpoint: Option<String>,
    },

    /// Network request failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Token rejected or malformed.
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// Internal application error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a reviewers file error.
    pub fn reviewers_file(problem: ReviewersFileProblem) -> Self {
        Self::ReviewersFile { problem }
    }

    /// Create a missing input error.
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput { name: name.into() }
    }

    /// Create an invalid input error with field name.
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a context error.
    pub fn context(message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
        }
    }

    /// Create a GitHub API error.
    pub fn github_api(message: impl Into<String>) -> Self {
        Self::GitHubApi {
            message: message.into(),
            status_code: None,
            endpoint: None,
        }
    }

    /// Create a GitHub API error with status code and endpoint.
    pub fn github_api_full(
        message: impl Into<String>,
        status_code: u16,
        endpoint: impl Into<String>,
    ) -> Self {
        Self::GitHubApi {
            message: message.into(),
            status_code: Some(status_code),
            endpoint: Some(endpoint.into()),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code of a failed API call, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::GitHubApi { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network("Request timed out")
        } else if err.is_connect() {
            Self::network("Failed to connect to server")
        } else if err.is_status() {
            Self::github_api(format!("HTTP error: {}", err))
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviewers_file_messages_are_verbatim() {
        assert_eq!(
            AppError::reviewers_file(ReviewersFileProblem::Unreadable).to_string(),
            "REVIEWERS file not found or unreadable."
        );
        assert_eq!(
            AppError::reviewers_file(ReviewersFileProblem::Empty).to_string(),
            "REVIEWERS file is empty."
        );
    }

    #[test]
    fn test_missing_input_display() {
        let err = AppError::missing_input("github-token");
        assert_eq!(
            err.to_string(),
            "Input required and not supplied: github-token"
        );
    }

    #[test]
    fn test_github_api_error_full() {
        let err = AppError::github_api_full("Resource not found", 404, "/repos/o/r/pulls/1/reviews");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "GitHub API error: Resource not found");
    }

    #[test]
    fn test_display_impl() {
        let err = AppError::authentication("Bad credentials");
        assert_eq!(format!("{}", err), "Authentication error: Bad credentials");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(err.to_string().starts_with("Internal error: JSON error:"));
    }
}
