//! The required reviewer check.
//!
//! Steps run strictly in order: wait, find the pull request, read the
//! required reviewer, fetch reviews, decide. Any error raised along the way
//! ends up in [`run`], which reports it as the run's failure.

use chrono::Local;

use crate::config::ActionInputs;
use crate::error::AppError;
use crate::models::review::{RequiredReviewer, ReviewEvent};
use crate::services::approval;
use crate::services::context::ActionContext;
use crate::services::github_client::ReviewSource;
use crate::services::reporter::Reporter;
use crate::services::reviewers_file;
use crate::services::wait;

/// How a check run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not triggered by a pull request; nothing to check.
    Skipped,
    /// The required reviewer's latest review is an approval.
    Approved {
        pr_number: u64,
        reviewer: String,
    },
    /// The run was marked as failed with this message.
    Failed(String),
}

/// Run the check and report its outcome.
///
/// `connect` builds the review source from the `github-token` input. It is
/// only called once the reviewers file has been read successfully.
pub async fn run<S, F, R>(
    inputs: &ActionInputs,
    context: &ActionContext,
    connect: F,
    reporter: &mut R,
) -> Outcome
where
    S: ReviewSource,
    F: FnOnce(&str) -> Result<S, AppError>,
    R: Reporter,
{
    let outcome = match check(inputs, context, connect, reporter).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::debug!("Check aborted: {:?}", e);
            Outcome::Failed(e.to_string())
        }
    };

    match &outcome {
        Outcome::Skipped => {}
        Outcome::Approved {
            pr_number,
            reviewer,
        } => reporter.info(&format!(
            "✅ PR #{} has been approved by {}.",
            pr_number, reviewer
        )),
        Outcome::Failed(message) => reporter.set_failed(message),
    }

    outcome
}

async fn check<S, F, R>(
    inputs: &ActionInputs,
    context: &ActionContext,
    connect: F,
    reporter: &mut R,
) -> Result<Outcome, AppError>
where
    S: ReviewSource,
    F: FnOnce(&str) -> Result<S, AppError>,
    R: Reporter,
{
    let milliseconds = inputs.milliseconds();
    reporter.info(&format!("Waiting for {} milliseconds...", milliseconds));
    reporter.debug(&timestamp());
    wait::wait(wait::parse_milliseconds(milliseconds)?).await;
    reporter.debug(&timestamp());

    let Some(pr_number) = context.pr_number else {
        reporter.warning("No PR number found. This action is meant to run on PRs.");
        return Ok(Outcome::Skipped);
    };

    let reviewer = reviewers_file::read_required_reviewer(&inputs.reviewers_file)?;
    log::debug!("Required reviewer: {}", reviewer);

    let token = inputs
        .github_token()
        .ok_or_else(|| AppError::missing_input("github-token"))?;
    let repo = context.repo()?;
    let source = connect(token)?;

    let events = source
        .list_reviews(&repo.owner, &repo.repo, pr_number)
        .await?;

    Ok(decide(pr_number, &reviewer, &events))
}

fn decide(
    pr_number: u64,
    reviewer: &RequiredReviewer,
    events: &[ReviewEvent],
) -> Outcome {
    if approval::is_approved(reviewer.as_str(), events) {
        Outcome::Approved {
            pr_number,
            reviewer: reviewer.to_string(),
        }
    } else {
        Outcome::Failed(format!("{} has not approved this PR.", reviewer))
    }
}

/// Local wall-clock time, e.g. `14:03:27 GMT+0200`.
fn timestamp() -> String {
    Local::now().format("%H:%M:%S GMT%z").to_string()
}
