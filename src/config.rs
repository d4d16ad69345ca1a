//! Action inputs.
//!
//! The Actions runner passes inputs as `INPUT_<NAME>` environment variables
//! and describes the run through `GITHUB_*` variables. Each one can also be
//! given as a flag when running the check by hand.

use std::path::PathBuf;

use clap::Parser;

use crate::services::github_client::DEFAULT_API_URL;
use crate::services::reviewers_file::DEFAULT_REVIEWERS_FILE;
use crate::services::wait::DEFAULT_MILLISECONDS;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "required-reviewer-check",
    version,
    about = "Fail unless the required reviewer has approved the pull request"
)]
pub struct ActionInputs {
    /// Milliseconds to wait before checking.
    #[arg(long, env = "INPUT_MILLISECONDS", default_value = "")]
    pub milliseconds: String,

    /// Token used to list the pull request's reviews.
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// File holding the required reviewer's login.
    #[arg(long, env = "REVIEWERS_FILE", default_value = DEFAULT_REVIEWERS_FILE)]
    pub reviewers_file: PathBuf,

    /// JSON payload of the triggering event.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Repository slug, `owner/repo`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl ActionInputs {
    /// The `milliseconds` input, falling back to the default when empty.
    pub fn milliseconds(&self) -> &str {
        let milliseconds = self.milliseconds.trim();
        if milliseconds.is_empty() {
            DEFAULT_MILLISECONDS
        } else {
            milliseconds
        }
    }

    /// The `github-token` input, treating an empty value as missing.
    pub fn github_token(&self) -> Option<&str> {
        self.github_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let inputs = ActionInputs::try_parse_from([
            "required-reviewer-check",
            "--milliseconds",
            "5",
            "--github-token",
            "ghs_abc",
            "--reviewers-file",
            "/tmp/REVIEWERS",
            "--repository",
            "octo/repo",
            "--api-url",
            "https://ghe.example.com/api/v3",
        ])
        .unwrap();

        assert_eq!(inputs.milliseconds(), "5");
        assert_eq!(inputs.github_token(), Some("ghs_abc"));
        assert_eq!(inputs.reviewers_file, PathBuf::from("/tmp/REVIEWERS"));
        assert_eq!(inputs.repository.as_deref(), Some("octo/repo"));
        assert_eq!(inputs.api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_empty_inputs_fall_back() {
        let inputs = ActionInputs::try_parse_from([
            "required-reviewer-check",
            "--milliseconds",
            "",
            "--github-token",
            "  ",
        ])
        .unwrap();

        assert_eq!(inputs.milliseconds(), "100");
        assert_eq!(inputs.github_token(), None);
    }
}
