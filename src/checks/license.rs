use crate::github::RepoSnapshot;
use crate::types::scoring::ScoreTally;

pub fn check_license(snapshot: &RepoSnapshot, tally: &mut ScoreTally) {
    let license_name = snapshot
        .metadata
        .license
        .as_ref()
        .and_then(|license| license.name.as_ref());
    if license_name.is_none() {
        tally.penalize(10, "No license - unprofessional");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::client::{LicenseInfo, RepoMetadata};
    use crate::github::url::ScanTarget;
    use std::collections::HashMap;

    fn snapshot(license: Option<LicenseInfo>) -> RepoSnapshot {
        RepoSnapshot {
            target: ScanTarget {
                owner: "octocat".to_string(),
                repo: "hello".to_string(),
            },
            metadata: RepoMetadata {
                license,
                ..RepoMetadata::default()
            },
            commits: Vec::new(),
            languages: HashMap::new(),
            readme: None,
            root_files: None,
        }
    }

    #[test]
    fn missing_license_is_flagged() {
        let mut tally = ScoreTally::new();
        check_license(&snapshot(None), &mut tally);
        assert_eq!(tally.score, 90);
        assert_eq!(tally.flags[0], "No license - unprofessional");
    }

    #[test]
    fn unnamed_license_object_still_counts_as_missing() {
        let mut tally = ScoreTally::new();
        check_license(&snapshot(Some(LicenseInfo { name: None })), &mut tally);
        assert_eq!(tally.score, 90);
    }

    #[test]
    fn named_license_passes_clean() {
        let license = LicenseInfo {
            name: Some("MIT License".to_string()),
        };
        let mut tally = ScoreTally::new();
        check_license(&snapshot(Some(license)), &mut tally);
        assert_eq!(tally.score, 100);
        assert!(tally.flags.is_empty());
    }
}
