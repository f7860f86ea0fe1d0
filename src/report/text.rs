use crate::types::report::ScanReport;
use crate::types::scoring::RiskTier;

pub fn to_text(report: &ScanReport) -> String {
    let tier = RiskTier::from_score(report.score);
    let rule = "=".repeat(60);

    let mut output = String::new();
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "RISK SCORE: {}/100 ({} {})\n",
        report.score,
        tier.emoji(),
        tier.label()
    ));
    output.push('\n');

    if report.red_flags.is_empty() {
        output.push_str("✅ No major red flags detected\n");
    } else {
        output.push_str("🚩 RED FLAGS DETECTED:\n\n");
        for flag in &report.red_flags {
            output.push_str(&format!("  • {flag}\n"));
        }
    }

    output.push_str(&rule);
    output.push('\n');
    output.push_str("METADATA:\n");
    output.push_str(&format!("  • Stars: {}\n", report.metadata.stars));
    output.push_str(&format!("  • Forks: {}\n", report.metadata.forks));
    output.push_str(&format!("  • Commits: {}\n", report.metadata.commits));
    output.push_str(&format!(
        "  • Language: {}\n",
        report.metadata.language.as_deref().unwrap_or("Unknown")
    ));
    output.push_str(&format!(
        "  • Created: {}\n",
        report
            .metadata
            .created_at
            .as_deref()
            .map(|date| date.chars().take(10).collect::<String>())
            .unwrap_or_else(|| "Unknown".to_string())
    ));
    output.push_str(&rule);
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::RepoSummary;

    fn sample_report(score: i64, red_flags: Vec<String>) -> ScanReport {
        ScanReport {
            score,
            risk_level: RiskTier::from_score(score).label().to_string(),
            red_flags,
            metadata: RepoSummary {
                stars: 42,
                forks: 7,
                commits: 30,
                language: Some("Rust".to_string()),
                created_at: Some("2023-05-01T00:00:00Z".to_string()),
            },
        }
    }

    #[test]
    fn text_report_shows_score_and_tier() {
        let rendered = to_text(&sample_report(100, Vec::new()));
        assert!(rendered.contains("RISK SCORE: 100/100 (✅ LOW RISK)"));
    }

    #[test]
    fn text_report_lists_flags_as_bullets() {
        let rendered = to_text(&sample_report(
            65,
            vec!["Only 2 commits - extremely suspicious".to_string()],
        ));
        assert!(rendered.contains("🚩 RED FLAGS DETECTED:"));
        assert!(rendered.contains("  • Only 2 commits - extremely suspicious"));
    }

    #[test]
    fn clean_report_says_no_flags() {
        let rendered = to_text(&sample_report(100, Vec::new()));
        assert!(rendered.contains("✅ No major red flags detected"));
        assert!(!rendered.contains("RED FLAGS DETECTED"));
    }

    #[test]
    fn created_date_is_truncated_to_day() {
        let rendered = to_text(&sample_report(100, Vec::new()));
        assert!(rendered.contains("  • Created: 2023-05-01\n"));
        assert!(!rendered.contains("00:00:00"));
    }

    #[test]
    fn missing_metadata_falls_back_to_unknown() {
        let mut report = sample_report(100, Vec::new());
        report.metadata.language = None;
        report.metadata.created_at = None;
        let rendered = to_text(&report);
        assert!(rendered.contains("  • Language: Unknown"));
        assert!(rendered.contains("  • Created: Unknown"));
    }
}
