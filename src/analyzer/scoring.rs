//! Score arithmetic: start at 100, subtract fixed rule penalties, clamp.

use crate::ScoreBand;

/// Every video starts here; rules only ever subtract.
pub const STARTING_SCORE: u32 = 100;

/// Calculator for SEO scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Final score after all rule penalties. Clamped into [0, 100];
    /// the score can never rise above the starting value.
    pub fn score_from_penalty(total_penalty: u32) -> u8 {
        STARTING_SCORE.saturating_sub(total_penalty).min(100) as u8
    }

    /// Get a description of the band
    pub fn band_description(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Good => "Excellent Performance - the metadata is working for this video",
            ScoreBand::NeedsWork => "Needs Improvement - several quick wins available",
            ScoreBand::Poor => "Critical Issues Detected - metadata is holding this video back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_penalty_is_a_perfect_score() {
        assert_eq!(ScoreCalculator::score_from_penalty(0), 100);
    }

    #[test]
    fn penalties_subtract_directly() {
        assert_eq!(ScoreCalculator::score_from_penalty(12), 88);
        assert_eq!(ScoreCalculator::score_from_penalty(42), 58);
    }

    #[test]
    fn score_clamps_at_zero() {
        assert_eq!(ScoreCalculator::score_from_penalty(100), 0);
        assert_eq!(ScoreCalculator::score_from_penalty(500), 0);
    }

    #[test]
    fn band_descriptions_match_bands() {
        assert!(ScoreCalculator::band_description(ScoreBand::Good).contains("Excellent"));
        assert!(ScoreCalculator::band_description(ScoreBand::NeedsWork).contains("Improvement"));
        assert!(ScoreCalculator::band_description(ScoreBand::Poor).contains("Critical"));
    }
}
