pub mod commits;
pub mod community;
pub mod ecosystem;
pub mod license;
pub mod ratio;
pub mod text;

use crate::github::RepoSnapshot;
use crate::types::report::{RepoSummary, ScanReport};
use crate::types::scoring::{RiskTier, ScoreTally};

/// Runs the full check suite in its fixed order and folds the tally into
/// the final report. Flag order equals check-execution order.
pub fn evaluate(snapshot: &RepoSnapshot) -> ScanReport {
    let mut tally = ScoreTally::new();
    commits::check_commit_patterns(snapshot, &mut tally);
    community::check_community_engagement(snapshot, &mut tally);
    ratio::check_code_to_commit_ratio(snapshot, &mut tally);
    text::check_description_and_readme(snapshot, &mut tally);
    ecosystem::check_ecosystem_markers(snapshot, &mut tally);
    license::check_license(snapshot, &mut tally);

    let (score, red_flags) = tally.finalize();
    let tier = RiskTier::from_score(score);

    ScanReport {
        score,
        risk_level: tier.label().to_string(),
        red_flags,
        metadata: RepoSummary {
            stars: snapshot.metadata.stargazers_count,
            forks: snapshot.metadata.forks_count,
            commits: snapshot.commits.len(),
            language: snapshot.metadata.language.clone(),
            created_at: snapshot.metadata.created_at.clone(),
        },
    }
}
