//! Public repository listing from the GitHub REST API.
//!
//! The projects section shows the owner's own repositories, most-starred
//! first. Fetching sits behind [`RepoSource`] so rendering and tests do not
//! depend on the network.

use std::cmp::Reverse;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::branding::APP_BINARY_NAME;

/// Base URL of the GitHub REST API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Number of repositories requested per listing.
pub const PER_PAGE: u8 = 50;

/// Request timeout for the listing call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Description shown for repositories without one.
pub const FALLBACK_DESCRIPTION: &str = "A project built with passion and code.";

/// A repository as returned by `GET /users/{user}/repos`.
///
/// Only the fields the site uses are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric id
    pub id: u64,
    /// Repository name (slug)
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Web URL of the repository
    pub html_url: String,
    /// Project homepage / live demo
    #[serde(default)]
    pub homepage: Option<String>,
    /// Primary language
    #[serde(default)]
    pub language: Option<String>,
    /// Star count
    #[serde(default)]
    pub stargazers_count: u32,
    /// Fork count
    #[serde(default)]
    pub forks_count: u32,
    /// Whether this repository is a fork
    #[serde(default)]
    pub fork: bool,
}

impl Repository {
    /// Human-readable title: dashes become spaces, each word capitalized.
    ///
    /// `"my-cool-app"` becomes `"My Cool App"`.
    #[must_use]
    pub fn display_title(&self) -> String {
        let spaced = self.name.replace('-', " ");
        let mut title = String::with_capacity(spaced.len());
        let mut at_word_start = true;

        for ch in spaced.chars() {
            if at_word_start && ch.is_alphanumeric() {
                title.extend(ch.to_uppercase());
            } else {
                title.push(ch);
            }
            at_word_start = !(ch.is_alphanumeric() || ch == '_');
        }

        title
    }

    /// Description, or the fallback line when missing or blank.
    #[must_use]
    pub fn description_or_fallback(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(FALLBACK_DESCRIPTION)
    }

    /// Homepage if set and non-empty.
    #[must_use]
    pub fn live_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }
}

/// Dot color for a repository language.
#[must_use]
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#F7DF1E",
        "Python" => "#3776AB",
        "Java" => "#B07219",
        "C++" => "#F34B7D",
        "C" => "#555555",
        "HTML" => "#E34C26",
        "CSS" => "#563D7C",
        "TypeScript" => "#3178C6",
        _ => "#888",
    }
}

/// Drops forks and excluded names, then sorts by stars, most first.
///
/// Exclusions match case-insensitively. Ties keep their API order.
#[must_use]
pub fn curate(repos: Vec<Repository>, excluded: &[String]) -> Vec<Repository> {
    let excluded: Vec<String> = excluded.iter().map(|name| name.to_lowercase()).collect();

    let mut kept: Vec<Repository> = repos
        .into_iter()
        .filter(|repo| !repo.fork && !excluded.contains(&repo.name.to_lowercase()))
        .collect();

    kept.sort_by_key(|repo| Reverse(repo.stargazers_count));
    kept
}

/// Repository listing errors.
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    /// Transport-level failure (DNS, TLS, timeout)
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success status
    #[error("GitHub returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body excerpt
        message: String,
    },
}

/// Source of a user's public repositories.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Lists the user's public repositories in API order.
    async fn list_repositories(&self, user: &str) -> Result<Vec<Repository>, GithubError>;
}

/// [`RepoSource`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    /// Creates a client for the public API.
    pub fn new() -> Result<Self, GithubError> {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Creates a client against another API root (GitHub Enterprise, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent(format!("{APP_BINARY_NAME}/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Listing URL for a user.
    #[must_use]
    pub fn repos_url(&self, user: &str) -> String {
        format!(
            "{}/users/{user}/repos?sort=updated&per_page={PER_PAGE}",
            self.base_url
        )
    }
}

#[async_trait]
impl RepoSource for GithubClient {
    async fn list_repositories(&self, user: &str) -> Result<Vec<Repository>, GithubError> {
        let url = self.repos_url(user);
        debug!("Fetching repositories from {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("GitHub listing failed with {}", status);
            return Err(GithubError::Status {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u32, fork: bool) -> Repository {
        Repository {
            id: u64::from(stars) + name.len() as u64,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/octocat/{name}"),
            homepage: None,
            language: None,
            stargazers_count: stars,
            forks_count: 0,
            fork,
        }
    }

    #[test]
    fn test_curate_filters_and_sorts() {
        let repos = vec![
            repo("small", 1, false),
            repo("forked", 99, true),
            repo("DSA", 50, false),
            repo("big", 10, false),
            repo("octocat", 40, false),
        ];
        let excluded = vec!["dsa".to_string(), "octocat".to_string()];

        let names: Vec<String> = curate(repos, &excluded)
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["big", "small"]);
    }

    #[test]
    fn test_curate_keeps_api_order_for_ties() {
        let repos = vec![repo("first", 3, false), repo("second", 3, false)];
        let names: Vec<String> = curate(repos, &[]).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_display_title() {
        assert_eq!(repo("my-cool-app", 0, false).display_title(), "My Cool App");
        assert_eq!(repo("portfolio", 0, false).display_title(), "Portfolio");
        assert_eq!(repo("todo-list-v2", 0, false).display_title(), "Todo List V2");
    }

    #[test]
    fn test_description_fallback() {
        let mut r = repo("x", 0, false);
        assert_eq!(r.description_or_fallback(), FALLBACK_DESCRIPTION);

        r.description = Some("   ".to_string());
        assert_eq!(r.description_or_fallback(), FALLBACK_DESCRIPTION);

        r.description = Some("A thing".to_string());
        assert_eq!(r.description_or_fallback(), "A thing");
    }

    #[test]
    fn test_language_color() {
        assert_eq!(language_color("Python"), "#3776AB");
        assert_eq!(language_color("Rust"), "#888");
    }

    #[test]
    fn test_deserialize_api_payload() {
        let payload = r#"[{
            "id": 1,
            "name": "hello-world",
            "description": null,
            "html_url": "https://github.com/octocat/hello-world",
            "homepage": "",
            "language": "JavaScript",
            "stargazers_count": 7,
            "forks_count": 2,
            "fork": false,
            "owner": {"login": "octocat"}
        }]"#;

        let repos: Vec<Repository> = serde_json::from_str(payload).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].stargazers_count, 7);
        assert_eq!(repos[0].live_url(), None);
    }

    #[test]
    fn test_repos_url() {
        let client = GithubClient::with_base_url("https://api.example.com/").unwrap();
        assert_eq!(
            client.repos_url("octocat"),
            "https://api.example.com/users/octocat/repos?sort=updated&per_page=50"
        );
    }
}
