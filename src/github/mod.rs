pub mod client;
pub mod url;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::Result;
use crate::github::client::{CommitRecord, GitHubClient, RepoMetadata};
use crate::github::url::ScanTarget;
use crate::types::config::ScanConfig;

/// Everything fetched about a repository before the checks run.
#[derive(Debug, Clone)]
pub struct RepoSnapshot {
    pub target: ScanTarget,
    pub metadata: RepoMetadata,
    pub commits: Vec<CommitRecord>,
    pub languages: HashMap<String, u64>,
    /// Lowercased README body from the first branch that had one.
    pub readme: Option<String>,
    /// Top-level entry names, when the contents listing succeeded.
    pub root_files: Option<Vec<String>>,
}

/// Collects all repository data the checks need.
///
/// The metadata endpoint is the only fatal fetch; every later fetch
/// degrades to an empty or absent value and the scan continues.
pub fn fetch_snapshot(
    client: &GitHubClient,
    target: &ScanTarget,
    config: &ScanConfig,
) -> Result<RepoSnapshot> {
    let metadata = client.fetch_repo(target)?;

    let commits = match client.fetch_commits(target) {
        Ok(commits) => commits,
        Err(e) => {
            warn!(
                "commit fetch failed for {}/{}: {e}",
                target.owner, target.repo
            );
            Vec::new()
        }
    };

    let languages = match client.fetch_languages(target) {
        Ok(languages) => languages,
        Err(e) => {
            debug!("language fetch failed: {e}");
            HashMap::new()
        }
    };

    let readme = config
        .readme
        .branches
        .iter()
        .find_map(|branch| match client.fetch_readme(target, branch) {
            Ok(text) => Some(text.to_lowercase()),
            Err(e) => {
                debug!("no README on branch {branch}: {e}");
                None
            }
        });

    let root_files = match client.fetch_root_files(target) {
        Ok(files) => Some(files),
        Err(e) => {
            debug!("contents fetch failed: {e}");
            None
        }
    };

    Ok(RepoSnapshot {
        target: target.clone(),
        metadata,
        commits,
        languages,
        readme,
        root_files,
    })
}
