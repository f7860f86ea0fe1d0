use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, ScanError};
use crate::github::url::ScanTarget;
use crate::types::config::ScanConfig;

const USER_AGENT: &str = concat!("redflag/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the GitHub REST API and raw content host.
pub struct GitHubClient {
    http: reqwest::blocking::Client,
    api_base: String,
    raw_base: String,
}

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`.
///
/// Every field defaults so that a sparse API response still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    #[allow(dead_code)]
    pub watchers_count: u64,
    #[serde(default)]
    #[allow(dead_code)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub license: Option<LicenseInfo>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LicenseInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// One commit, flattened to the fields the checks care about.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub author_email: Option<String>,
    pub authored_at: Option<String>,
}

#[derive(Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    author: Option<CommitAuthor>,
}

#[derive(Deserialize)]
struct CommitAuthor {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Deserialize)]
struct ContentEntry {
    name: String,
}

impl GitHubClient {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_base: config.http.api_base.trim_end_matches('/').to_string(),
            raw_base: config.http.raw_base.trim_end_matches('/').to_string(),
        })
    }

    fn api_get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()?;
        if !response.status().is_success() {
            return Err(ScanError::RepoUnavailable {
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    /// Fetches repository metadata.
    pub fn fetch_repo(&self, target: &ScanTarget) -> Result<RepoMetadata> {
        let url = format!("{}/repos/{}/{}", self.api_base, target.owner, target.repo);
        Ok(self.api_get(&url)?.json()?)
    }

    /// Fetches the most recent page of commits.
    pub fn fetch_commits(&self, target: &ScanTarget) -> Result<Vec<CommitRecord>> {
        let url = format!(
            "{}/repos/{}/{}/commits",
            self.api_base, target.owner, target.repo
        );
        let entries: Vec<CommitEntry> = self.api_get(&url)?.json()?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                let author = entry.commit.author;
                CommitRecord {
                    author_email: author.as_ref().and_then(|a| a.email.clone()),
                    authored_at: author.and_then(|a| a.date),
                }
            })
            .collect())
    }

    /// Fetches the language byte-count breakdown.
    pub fn fetch_languages(&self, target: &ScanTarget) -> Result<HashMap<String, u64>> {
        let url = format!(
            "{}/repos/{}/{}/languages",
            self.api_base, target.owner, target.repo
        );
        Ok(self.api_get(&url)?.json()?)
    }

    /// Fetches the raw README.md from the given branch.
    pub fn fetch_readme(&self, target: &ScanTarget, branch: &str) -> Result<String> {
        let url = format!(
            "{}/{}/{}/{}/README.md",
            self.raw_base, target.owner, target.repo, branch
        );
        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ScanError::RepoUnavailable {
                status: response.status().as_u16(),
            });
        }
        Ok(response.text()?)
    }

    /// Fetches the names of top-level files and directories.
    pub fn fetch_root_files(&self, target: &ScanTarget) -> Result<Vec<String>> {
        let url = format!(
            "{}/repos/{}/{}/contents",
            self.api_base, target.owner, target.repo
        );
        let entries: Vec<ContentEntry> = self.api_get(&url)?.json()?;
        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}
