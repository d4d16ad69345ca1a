//! GitHub API client.
//!
//! Provides an HTTP client for the GitHub REST API with token
//! authentication. Only the pull request review listing is needed.

use std::future::Future;

use crate::error::AppError;
use crate::models::review::ReviewEvent;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";

const USER_AGENT: &str = concat!("required-reviewer-check/", env!("CARGO_PKG_VERSION"));

/// GitHub API client configuration.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL of the API (e.g., `https://api.github.com` or
    /// `https://ghe.example.com/api/v3`).
    pub api_url: String,

    /// Token used as a bearer credential.
    pub token: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: String::new(),
            timeout_secs: 30,
        }
    }
}

/// GitHub API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubClientConfig,
}

/// GitHub user from API.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

/// Pull request review from API.
///
/// Only the fields the approval decision reads; the rest of the payload is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubReview {
    /// `null` when the reviewer's account has been deleted.
    pub user: Option<GitHubUser>,
    pub state: String,
}

impl GitHubReview {
    /// Convert to a review event; reviews without an author are dropped.
    pub fn into_event(self) -> Option<ReviewEvent> {
        let user = self.user?;
        if user.login.is_empty() {
            return None;
        }
        Some(ReviewEvent::new(user.login, self.state))
    }
}

/// Source of the reviews submitted on a pull request, oldest first.
pub trait ReviewSource {
    fn list_reviews(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> impl Future<Output = Result<Vec<ReviewEvent>, AppError>> + Send;
}

impl GitHubClient {
    /// Create a new GitHub client.
    pub fn new(config: GitHubClientConfig) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();

        let mut token_value = header::HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| AppError::authentication("Invalid token format"))?;
        token_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, token_value);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static(API_VERSION),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Full URL for an API path.
    fn api_url(&self, path: &str) -> String {
        build_api_url(&self.config.api_url, path)
    }

    /// Handle API response errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, AppError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| AppError::internal(format!("Failed to parse response: {}", e)));
        }

        let rate_limited = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            == Some("0");

        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        let body_message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .filter(|m| !m.is_empty());

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::authentication(
                body_message.unwrap_or_else(|| "Bad credentials".to_string()),
            ));
        }

        // Body message first; fixed text only when the body has none.
        let message = match (status, body_message) {
            (_, Some(msg)) => msg,
            (StatusCode::FORBIDDEN, None) if rate_limited => "API rate limit exceeded".to_string(),
            (StatusCode::FORBIDDEN, None) => "Access denied".to_string(),
            (StatusCode::NOT_FOUND, None) => "Resource not found".to_string(),
            (StatusCode::TOO_MANY_REQUESTS, None) => "Rate limit exceeded".to_string(),
            (_, None) => format!("Request failed ({}): {}", status_code, body),
        };

        Err(AppError::github_api_full(message, status_code, endpoint))
    }

    /// List the reviews on a pull request in submission order.
    ///
    /// Only the first page the API returns is fetched.
    pub async fn get_pull_request_reviews(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<GitHubReview>, AppError> {
        let endpoint = format!("/repos/{}/{}/pulls/{}/reviews", owner, repo, pull_number);
        let url = self.api_url(&endpoint);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(response, &endpoint).await
    }
}

impl ReviewSource for GitHubClient {
    async fn list_reviews(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<ReviewEvent>, AppError> {
        let reviews = self
            .get_pull_request_reviews(owner, repo, pull_number)
            .await?;
        log::debug!(
            "Fetched {} reviews for {}/{}#{}",
            reviews.len(),
            owner,
            repo,
            pull_number
        );

        Ok(reviews
            .into_iter()
            .filter_map(GitHubReview::into_event)
            .collect())
    }
}

fn build_api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
