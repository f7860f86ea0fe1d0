use crate::github::RepoSnapshot;
use crate::types::scoring::ScoreTally;

pub fn check_community_engagement(snapshot: &RepoSnapshot, tally: &mut ScoreTally) {
    let stars = snapshot.metadata.stargazers_count;
    let forks = snapshot.metadata.forks_count;

    if stars == 0 {
        tally.penalize(20, "0 stars - no community validation");
    } else if stars < 5 {
        tally.penalize(10, format!("Only {stars} stars - minimal community interest"));
    }

    if forks == 0 {
        tally.penalize(15, "0 forks - no community contribution");
    }

    if snapshot.metadata.fork {
        tally.penalize(10, "Repository is a fork - may not be original work");
    }
}
