use crate::github::RepoSnapshot;
use crate::types::scoring::ScoreTally;

/// Compares total code volume against commit count. A vast codebase that
/// arrived in a handful of commits is the signature of a copy-paste job.
pub fn check_code_to_commit_ratio(snapshot: &RepoSnapshot, tally: &mut ScoreTally) {
    let total_bytes: u64 = snapshot.languages.values().sum();
    let commit_count = snapshot.commits.len() as u64;
    if total_bytes == 0 || commit_count == 0 {
        return;
    }

    let ratio = total_bytes / commit_count;
    if ratio > 50_000 {
        tally.penalize(
            40,
            format!("Extreme code-to-commit ratio ({ratio} bytes per commit) - likely copy-pasted"),
        );
    } else if ratio > 10_000 {
        tally.penalize(
            25,
            format!("High code-to-commit ratio ({ratio} bytes per commit) - suspicious"),
        );
    } else if ratio > 5_000 {
        tally.penalize(
            15,
            format!("Elevated code-to-commit ratio ({ratio} bytes per commit) - review recommended"),
        );
    }
}
