use serde::Serialize;

/// Final result of a repository scan, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub score: i64,
    pub risk_level: String,
    pub red_flags: Vec<String>,
    pub metadata: RepoSummary,
}

/// Subset of repository metadata surfaced alongside the score.
#[derive(Debug, Clone, Serialize)]
pub struct RepoSummary {
    pub stars: u64,
    pub forks: u64,
    pub commits: usize,
    pub language: Option<String>,
    #[serde(skip)]
    pub created_at: Option<String>,
}
