//! Collaborators of the check.
//!
//! Each service covers one concern: the delay step, the reviewers file, the
//! run context, the GitHub API, the outcome sink and the approval decision
//! itself. Only [`approval`] holds domain logic; it is a pure function of
//! its inputs.

pub mod approval;
pub mod context;
pub mod github_client;
pub mod reporter;
pub mod reviewers_file;
pub mod wait;

pub use github_client::{GitHubClient, ReviewSource};
pub use reporter::{ActionsReporter, Reporter};
