use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::github::client::CommitRecord;
use crate::github::RepoSnapshot;
use crate::types::scoring::ScoreTally;

/// Author e-mails are deduplicated over at most this many commits.
const AUTHOR_SAMPLE: usize = 50;

pub fn check_commit_patterns(snapshot: &RepoSnapshot, tally: &mut ScoreTally) {
    let commits = &snapshot.commits;
    let count = commits.len();

    if count < 3 {
        tally.penalize(35, format!("Only {count} commits - extremely suspicious"));
    } else if count < 10 {
        tally.penalize(25, format!("Only {count} commits - suspiciously low"));
    } else if count < 25 {
        tally.penalize(15, format!("{count} commits - below average"));
    }

    if let Some(days) = days_since_last_commit(commits) {
        if days > 365 {
            tally.penalize(30, format!("Abandoned: last commit {days} days ago"));
        } else if days > 180 {
            tally.penalize(20, format!("Stale: last commit {days} days ago"));
        } else if days > 90 {
            tally.penalize(10, format!("Inactive: last commit {days} days ago"));
        }
    }

    if count >= 5 {
        let unique = unique_author_count(commits);
        if unique == 1 && count > 20 {
            tally.penalize(15, format!("Single contributor across {count} commits"));
        }
    }
}

fn days_since_last_commit(commits: &[CommitRecord]) -> Option<i64> {
    // Commits arrive most-recent-first, so the head is the latest.
    let latest = commits.first()?.authored_at.as_deref()?;
    let parsed = DateTime::parse_from_rfc3339(latest).ok()?;
    Some((Utc::now() - parsed.with_timezone(&Utc)).num_days())
}

fn unique_author_count(commits: &[CommitRecord]) -> usize {
    commits
        .iter()
        .take(AUTHOR_SAMPLE)
        .filter_map(|commit| commit.author_email.as_deref())
        .collect::<HashSet<_>>()
        .len()
}
