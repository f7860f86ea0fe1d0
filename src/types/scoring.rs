/// Every scan starts from a perfect score and loses points per red flag.
pub const BASELINE_SCORE: i64 = 100;

/// Running score and flag list threaded through the check suite.
///
/// The score is left unclamped while checks run (it may go negative);
/// [`ScoreTally::finalize`] applies the single [0, 100] clamp at the end.
/// Flags keep check-execution order.
#[derive(Debug, Clone)]
pub struct ScoreTally {
    pub score: i64,
    pub flags: Vec<String>,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self {
            score: BASELINE_SCORE,
            flags: Vec::new(),
        }
    }

    /// Subtract `points` and record the matching red flag.
    pub fn penalize(&mut self, points: i64, flag: impl Into<String>) {
        self.score -= points;
        self.flags.push(flag.into());
    }

    /// Clamp the accumulated score into [0, 100] and release the flags.
    pub fn finalize(self) -> (i64, Vec<String>) {
        (self.score.clamp(0, 100), self.flags)
    }
}

impl Default for ScoreTally {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    MediumLow,
    MediumHigh,
    High,
    Critical,
}

impl RiskTier {
    /// Map a clamped score to its tier. Lower bounds are inclusive.
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            RiskTier::Low
        } else if score >= 60 {
            RiskTier::MediumLow
        } else if score >= 40 {
            RiskTier::MediumHigh
        } else if score >= 20 {
            RiskTier::High
        } else {
            RiskTier::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK",
            RiskTier::MediumLow => "MEDIUM-LOW RISK",
            RiskTier::MediumHigh => "MEDIUM-HIGH RISK",
            RiskTier::High => "HIGH RISK",
            RiskTier::Critical => "CRITICAL RISK",
        }
    }

    /// Terminal marker used by the text renderer only.
    pub fn emoji(&self) -> &'static str {
        match self {
            RiskTier::Low => "✅",
            RiskTier::MediumLow => "🟡",
            RiskTier::MediumHigh => "⚠️",
            RiskTier::High => "🚨",
            RiskTier::Critical => "🔴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_starts_at_baseline_with_no_flags() {
        let tally = ScoreTally::new();
        assert_eq!(tally.score, BASELINE_SCORE);
        assert!(tally.flags.is_empty());
    }

    #[test]
    fn penalize_subtracts_and_records_flag_in_order() {
        let mut tally = ScoreTally::new();
        tally.penalize(35, "first");
        tally.penalize(20, "second");
        assert_eq!(tally.score, 45);
        assert_eq!(tally.flags, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn finalize_clamps_deeply_negative_sum_to_zero() {
        // Worst case across the whole suite is roughly -280.
        let mut tally = ScoreTally::new();
        for points in [35, 30, 15, 20, 15, 10, 40, 15, 20, 25, 10, 15, 20, 10] {
            tally.penalize(points, format!("penalty {points}"));
        }
        assert!(tally.score < 0);
        let (score, flags) = tally.finalize();
        assert_eq!(score, 0);
        assert_eq!(flags.len(), 14);
    }

    #[test]
    fn finalize_clamps_inflated_score_to_one_hundred() {
        let mut tally = ScoreTally::new();
        tally.score = 150;
        let (score, _) = tally.finalize();
        assert_eq!(score, 100);
    }

    #[test]
    fn finalize_keeps_in_range_scores_untouched() {
        let mut tally = ScoreTally::new();
        tally.penalize(35, "only penalty");
        let (score, _) = tally.finalize();
        assert_eq!(score, 65);
    }

    #[test]
    fn tier_lower_bounds_are_inclusive() {
        assert_eq!(RiskTier::from_score(100), RiskTier::Low);
        assert_eq!(RiskTier::from_score(80), RiskTier::Low);
        assert_eq!(RiskTier::from_score(79), RiskTier::MediumLow);
        assert_eq!(RiskTier::from_score(60), RiskTier::MediumLow);
        assert_eq!(RiskTier::from_score(59), RiskTier::MediumHigh);
        assert_eq!(RiskTier::from_score(40), RiskTier::MediumHigh);
        assert_eq!(RiskTier::from_score(39), RiskTier::High);
        assert_eq!(RiskTier::from_score(20), RiskTier::High);
        assert_eq!(RiskTier::from_score(19), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(0), RiskTier::Critical);
    }

    #[test]
    fn tier_labels_match_reported_strings() {
        assert_eq!(RiskTier::Low.label(), "LOW RISK");
        assert_eq!(RiskTier::MediumLow.label(), "MEDIUM-LOW RISK");
        assert_eq!(RiskTier::MediumHigh.label(), "MEDIUM-HIGH RISK");
        assert_eq!(RiskTier::High.label(), "HIGH RISK");
        assert_eq!(RiskTier::Critical.label(), "CRITICAL RISK");
    }
}
