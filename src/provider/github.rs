//! GitHub REST Client
//!
//! Content provider implementation over the GitHub REST v3 API: contents
//! reads (base64 payloads), code search, and the latest commit hash.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{ContentProvider, SearchHit};
use crate::config::GithubConfig;
use crate::constants::github::SEARCH_PAGE_SIZE;
use crate::types::{Result, ScoutError};

const ACCEPT_JSON: &str = "application/vnd.github+json";

/// GitHub REST v3 client with optional token authentication.
pub struct GithubClient {
    client: reqwest::Client,
    api_base: Url,
    user_agent: String,
    token: Option<SecretString>,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_base", &self.api_base.as_str())
            .field("user_agent", &self.user_agent)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    name: String,
    path: String,
}

#[derive(Debug, Deserialize)]
struct CommitItem {
    sha: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: Url::parse(&config.api_base)?,
            user_agent: config.user_agent.clone(),
            token: config.token.clone().map(SecretString::from),
        })
    }

    fn request(&self, url: String) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_JSON)
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some(token) = &self.token {
            builder = builder.header(
                AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            );
        }
        builder
    }
}

/// Decode a GitHub base64 payload, which arrives wrapped in newlines.
fn decode_content(path: &str, encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64
        .decode(compact.as_bytes())
        .map_err(|e| ScoutError::decode(path, e.to_string()))
}

#[async_trait]
impl ContentProvider for GithubClient {
    async fn get(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}repos/{owner}/{repo}/contents/{path}", self.api_base);

        debug!(repo = %format!("{owner}/{repo}"), path, "reading file");

        let response = self.request(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ScoutError::NotFound {
                path: path.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(ScoutError::decode(
                path,
                format!("GitHub returned {}", response.status()),
            ));
        }

        let contents: ContentsResponse = response.json().await?;
        decode_content(path, &contents.content)
    }

    async fn search(&self, owner: &str, repo: &str, extension: &str) -> Result<Vec<SearchHit>> {
        let url = format!("{}search/code", self.api_base);
        let query = format!("extension:{extension} repo:{owner}/{repo}");

        debug!(repo = %format!("{owner}/{repo}"), extension, "searching code");

        let per_page = SEARCH_PAGE_SIZE.to_string();
        let response = self
            .request(url)
            .query(&[("q", query.as_str()), ("per_page", per_page.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScoutError::Search {
                extension: extension.to_string(),
                message: format!("GitHub returned {}", response.status()),
            });
        }

        let results: SearchResponse = response.json().await?;
        Ok(results
            .items
            .into_iter()
            .map(|item| SearchHit {
                path: item.path,
                filename: item.name,
            })
            .collect())
    }

    async fn latest_revision(&self, owner: &str, repo: &str) -> Result<String> {
        let url = format!("{}repos/{owner}/{repo}/commits", self.api_base);

        let response = self
            .request(url)
            .query(&[("per_page", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScoutError::decode(
                format!("{owner}/{repo}"),
                format!("GitHub returned {}", response.status()),
            ));
        }

        let commits: Vec<CommitItem> = response.json().await?;
        commits
            .into_iter()
            .next()
            .map(|c| c.sha)
            .ok_or_else(|| ScoutError::NoCommits {
                repo: format!("{owner}/{repo}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_content_strips_newlines() {
        // GitHub wraps base64 payloads at 60 columns.
        let encoded = "cHViIGZ1biBtYWlu\nKCk6IFN0cmluZyB7fQ==\n";
        let decoded = decode_content("main.cdc", encoded).unwrap();
        assert_eq!(decoded, b"pub fun main(): String {}");
    }

    #[test]
    fn test_decode_content_reports_path() {
        let err = decode_content("bad.cdc", "!!!").unwrap_err();
        assert!(matches!(err, ScoutError::Decode { path, .. } if path == "bad.cdc"));
    }

    #[test]
    fn test_search_response_shape() {
        let body = r#"{
            "total_count": 1,
            "items": [{"name": "Foo.cdc", "path": "contracts/Foo.cdc", "sha": "abc"}]
        }"#;
        let results: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(results.items[0].path, "contracts/Foo.cdc");
        assert_eq!(results.items[0].name, "Foo.cdc");
    }
}
