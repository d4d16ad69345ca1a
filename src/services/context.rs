//! Workflow run context: the triggering event and the repository.

use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

const MISSING_REPOSITORY: &str =
    "context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'";

/// Repository the workflow runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Parse an `owner/repo` slug.
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, repo) = slug.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

/// The parts of the event payload the check looks at.
#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: Option<serde_json::Value>,
}

/// What the check knows about the run that triggered it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionContext {
    /// Pull request number; `None` for non-PR events.
    pub pr_number: Option<u64>,
    repository: Option<String>,
}

impl ActionContext {
    pub fn new(pr_number: Option<u64>, repository: Option<String>) -> Self {
        Self {
            pr_number,
            repository,
        }
    }

    /// Load the context from the event payload file and repository slug.
    ///
    /// A missing payload file yields an empty payload. A payload that
    /// exists but is not JSON is an error.
    pub fn load(event_path: Option<&Path>, repository: Option<&str>) -> Result<Self, AppError> {
        let payload = match event_path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    AppError::context(format!(
                        "Failed to read event payload {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                serde_json::from_str::<EventPayload>(&raw)?
            }
            Some(path) => {
                log::debug!("GITHUB_EVENT_PATH {} does not exist", path.display());
                EventPayload::default()
            }
            None => EventPayload::default(),
        };

        let pr_number = payload
            .pull_request
            .and_then(|pr| pr.number)
            .and_then(|n| n.as_u64())
            .filter(|n| *n != 0);

        Ok(Self {
            pr_number,
            repository: repository.map(str::to_string),
        })
    }

    /// Repository owner and name; required once the check talks to GitHub.
    pub fn repo(&self) -> Result<RepoRef, AppError> {
        self.repository
            .as_deref()
            .and_then(RepoRef::parse)
            .ok_or_else(|| AppError::context(MISSING_REPOSITORY))
    }
}
