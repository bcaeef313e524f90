use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use url::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;

/// Upper bound on repositories fetched per user (one page, no pagination).
pub const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub API returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no recent public events available")]
    NoEvents,
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Network(e) => e.status(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub actor: Actor,
}

/// The `/users/{login}` fields the card uses.
#[derive(Debug, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
}

#[derive(Deserialize)]
struct RateLimitResponse {
    rate: RateLimit,
}

#[derive(Clone)]
pub struct GithubClient {
    base: Arc<Url>,
    http: Arc<Client>,
    timeout: Duration,
    rate_limit_timeout: Duration,
}

impl GithubClient {
    /// REST client carrying `headers` on every request.
    pub fn new(config: &Config, headers: HeaderMap) -> anyhow::Result<Self> {
        use anyhow::Context;

        let base = Url::parse(&config.api_base)
            .with_context(|| format!("Invalid API base URL `{}`", config.api_base))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("API base URL `{base}` cannot carry a path");
        }

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base: Arc::new(base),
            http: Arc::new(http),
            timeout: config.api_timeout,
            rate_limit_timeout: config.rate_limit_timeout,
        })
    }

    /// Base URL with `segments` appended, each percent-encoded as a single
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = (*self.base).clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET the endpoint and decode the body, failing on any non-2xx status.
    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<T, FetchError> {
        let endpoint = self.endpoint(segments);
        let url = endpoint.to_string();
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(endpoint)
            .query(query)
            .timeout(timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode { url, source })
    }

    /// One page of the public events feed.
    pub async fn recent_events(&self) -> Result<Vec<Event>, FetchError> {
        self.get_json(&["events"], &[], self.timeout).await
    }

    pub async fn user(&self, login: &str) -> Result<User, FetchError> {
        self.get_json(&["users", login], &[], self.timeout).await
    }

    /// Up to 100 repositories, most recently updated first.
    ///
    /// A non-success status yields an empty list; network and decode
    /// failures still propagate.
    pub async fn repos(&self, login: &str) -> Result<Vec<Repo>, FetchError> {
        let query = [
            ("sort", "updated".to_string()),
            ("per_page", REPOS_PER_PAGE.to_string()),
        ];
        match self
            .get_json(&["users", login, "repos"], &query, self.timeout)
            .await
        {
            Err(FetchError::Status { status, url }) => {
                tracing::debug!(%status, %url, "repository listing failed; assuming none");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    pub async fn rate_limit(&self) -> Result<RateLimit, FetchError> {
        let resp: RateLimitResponse = self
            .get_json(&["rate_limit"], &[], self.rate_limit_timeout)
            .await?;
        Ok(resp.rate)
    }
}
