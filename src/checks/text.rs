use crate::github::RepoSnapshot;
use crate::types::scoring::ScoreTally;

const MARKETING_BUZZWORDS: &[&str] = &[
    "world's first",
    "revolutionary",
    "game-changing",
    "unprecedented",
    "80%",
    "10x",
    "100x",
    "to the moon",
];

const FUNDING_KEYWORDS: &[&str] = &[
    "seeking",
    "grant",
    "subsidy",
    "funding",
    "donate",
    "sponsor",
    "investors",
];

const TOKEN_SALE_KEYWORDS: &[&str] = &[
    "token sale",
    "token launch",
    "presale",
    "pre-sale",
    "initial coin offering",
    "tokenomics",
    "airdrop",
    "mint is live",
];

/// Matching is plain substring containment over lowercased text, so
/// "grants" counts for "grant". Accepted imprecision.
fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

pub fn check_description_and_readme(snapshot: &RepoSnapshot, tally: &mut ScoreTally) {
    if let Some(description) = &snapshot.metadata.description {
        let description = description.to_lowercase();
        let buzzwords = count_matches(&description, MARKETING_BUZZWORDS);
        if buzzwords >= 2 {
            tally.penalize(15, format!("{buzzwords} marketing buzzwords in description"));
        } else if buzzwords == 1 {
            tally.penalize(8, "Marketing buzzwords detected in description");
        }
    }

    match &snapshot.readme {
        Some(readme) => {
            // Snapshot READMEs are already lowercased by the fetch layer.
            let funding = count_matches(readme, FUNDING_KEYWORDS);
            if funding >= 3 {
                tally.penalize(20, format!("{funding} funding-seeking keywords in README"));
            } else if funding == 2 {
                tally.penalize(12, "Funding-seeking language detected in README");
            }

            if count_matches(readme, TOKEN_SALE_KEYWORDS) > 0 {
                tally.penalize(25, "Token sale language in README - potential scam");
            }

            if readme.len() < 200 {
                tally.penalize(10, "README under 200 characters - insufficient documentation");
            }
        }
        None => {
            tally.penalize(15, "No README.md found - poor documentation");
        }
    }
}
