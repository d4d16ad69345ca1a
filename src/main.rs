use std::process::ExitCode;

use clap::Parser;
use required_reviewer_check::check::{self, Outcome};
use required_reviewer_check::config::ActionInputs;
use required_reviewer_check::services::context::ActionContext;
use required_reviewer_check::services::github_client::{GitHubClient, GitHubClientConfig};
use required_reviewer_check::services::reporter::{ActionsReporter, Reporter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let inputs = ActionInputs::parse();
    let mut reporter = ActionsReporter::stdout();

    let outcome = match ActionContext::load(inputs.event_path.as_deref(), inputs.repository.as_deref())
    {
        Ok(context) => {
            let api_url = inputs.api_url.clone();
            check::run(
                &inputs,
                &context,
                |token| {
                    GitHubClient::new(GitHubClientConfig {
                        api_url,
                        token: token.to_string(),
                        ..Default::default()
                    })
                },
                &mut reporter,
            )
            .await
        }
        Err(e) => {
            reporter.set_failed(&e.to_string());
            Outcome::Failed(e.to_string())
        }
    };

    log::debug!("Outcome: {:?}", outcome);

    if reporter.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
