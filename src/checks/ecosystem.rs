use crate::github::RepoSnapshot;
use crate::types::scoring::ScoreTally;

/// Files a genuine Solana project is expected to ship at its root.
pub const SOLANA_MARKER_FILES: &[&str] = &["Anchor.toml", "Cargo.toml", "package.json"];

pub fn check_ecosystem_markers(snapshot: &RepoSnapshot, tally: &mut ScoreTally) {
    // No contents listing means the check is skipped, not failed.
    let Some(root_files) = &snapshot.root_files else {
        return;
    };

    let description = snapshot
        .metadata
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let claims_solana = description.contains("solana")
        || snapshot.target.repo.to_lowercase().contains("solana");
    if !claims_solana {
        return;
    }

    let has_marker = root_files
        .iter()
        .any(|name| SOLANA_MARKER_FILES.contains(&name.as_str()));
    if !has_marker {
        tally.penalize(
            20,
            format!("Claims Solana but missing {}", SOLANA_MARKER_FILES.join(", ")),
        );
    }
}
