//! Repository-hosting API adapter.
//!
//! Lists a user's repositories, drops forks and housekeeping repos, and
//! for the featured subset fetches the README and runs the section
//! parser. A failed README fetch degrades that one repo to "no readme";
//! it never fails the list.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::readme::{ReadmeSections, parse_readme};
use super::store::{CACHE_TTL, Cached, FetchError};
use super::Repo;

const API_BASE: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GithubClient {
    client: Client,
    user: String,
    token: Option<String>,
    featured: Vec<String>,
    repos: Cached<Vec<Repo>>,
}

#[derive(Debug, Deserialize)]
struct ReadmePayload {
    content: String,
}

impl GithubClient {
    pub fn new(
        user: impl Into<String>,
        token: Option<String>,
        featured: Vec<String>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("deskfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            user: user.into(),
            token,
            featured,
            repos: Cached::new(),
        })
    }

    fn get(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        let request = self.client.get(url).header("Accept", ACCEPT);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// The user's repositories, most recently updated first, with parsed
    /// READMEs attached to the featured ones. Cached for an hour.
    pub fn repos(&self) -> Result<Vec<Repo>, FetchError> {
        self.repos.get_or_fetch(CACHE_TTL, || self.fetch_repos())
    }

    fn fetch_repos(&self) -> Result<Vec<Repo>, FetchError> {
        let url = format!("{API_BASE}/users/{}/repos?sort=updated&per_page=100", self.user);
        tracing::debug!(user = %self.user, "listing repositories");
        let response = self.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource: "repositories".to_string(),
                status,
            });
        }
        let mut repos: Vec<Repo> = response.json()?;
        repos.retain(|repo| keep_repo(repo, &self.user));
        for repo in &mut repos {
            if is_featured(&self.featured, &repo.name) {
                repo.readme = self.fetch_readme(&repo.name);
            }
        }
        Ok(repos)
    }

    /// Fetch and section one repository README. Any failure along the way
    /// is logged and reported as "no readme".
    fn fetch_readme(&self, repo: &str) -> Option<ReadmeSections> {
        let url = format!("{API_BASE}/repos/{}/{repo}/readme", self.user);
        let response = match self.get(&url).send() {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::debug!(repo, status = %response.status(), "readme not available");
                return None;
            }
            Err(error) => {
                tracing::debug!(repo, %error, "readme fetch failed");
                return None;
            }
        };
        let payload: ReadmePayload = response.json().ok()?;
        let raw = decode_content(&payload.content)?;
        Some(parse_readme(&raw))
    }
}

/// Keep user-authored project repos: forks, the profile repo and the
/// `.github` housekeeping repo are dropped from the listing.
fn keep_repo(repo: &Repo, user: &str) -> bool {
    !repo.fork && repo.name != user && repo.name != ".github"
}

fn is_featured(featured: &[String], name: &str) -> bool {
    featured
        .iter()
        .any(|featured| featured.eq_ignore_ascii_case(name))
}

/// README content arrives base64 encoded with embedded newlines.
fn decode_content(content: &str) -> Option<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, fork: bool) -> Repo {
        Repo {
            id: 1,
            name: name.into(),
            description: None,
            html_url: format!("https://example.test/{name}"),
            topics: vec![],
            language: None,
            stargazers_count: 0,
            homepage: None,
            fork,
            readme: None,
        }
    }

    #[test]
    fn listing_drops_forks_the_profile_repo_and_housekeeping() {
        assert!(keep_repo(&repo("finance-inator", false), "alexm"));
        assert!(!keep_repo(&repo("some-fork", true), "alexm"));
        assert!(!keep_repo(&repo("alexm", false), "alexm"));
        assert!(!keep_repo(&repo(".github", false), "alexm"));
    }

    #[test]
    fn featured_matching_ignores_case() {
        let featured = vec!["Finance-inator".to_string()];
        assert!(is_featured(&featured, "finance-inator"));
        assert!(is_featured(&featured, "FINANCE-INATOR"));
        assert!(!is_featured(&featured, "fitness-inator"));
        assert!(!is_featured(&[], "finance-inator"));
    }

    #[test]
    fn decodes_base64_with_line_breaks() {
        // "## Présentation\ncontenu\n" encoded the way the API returns it
        let encoded = "IyMgUHLDqXNlbnRhdGlvbgpj\nb250ZW51Cg==\n";
        let decoded = decode_content(encoded).expect("valid payload");
        assert_eq!(decoded, "## Présentation\ncontenu\n");
        let sections = parse_readme(&decoded);
        assert_eq!(sections.presentation.as_deref(), Some("contenu"));
    }

    #[test]
    fn invalid_base64_degrades_to_none() {
        assert!(decode_content("not base64 at all!").is_none());
    }
}
