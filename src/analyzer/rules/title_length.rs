//! Title length: 30-70 characters is the visibility sweet spot.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::{lengthen_title, truncate_title};
use crate::{Action, ActionKind, VideoRecord};

const MIN_CHARS: usize = 30;
const MAX_CHARS: usize = 70;
const PENALTY_TOO_SHORT: u32 = 12;
const PENALTY_TOO_LONG: u32 = 8;

/// Rule for titles outside the 30-70 character range
pub struct TitleLengthRule;

impl TitleLengthRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TitleLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for TitleLengthRule {
    fn name(&self) -> &'static str {
        "title-length"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let title = &video.snippet.title;
        let chars = title.chars().count();

        if chars < MIN_CHARS {
            RuleOutcome::issue(
                PENALTY_TOO_SHORT,
                "Title is too short. Aim for 50-60 characters to maximize visibility and CTR.",
            )
            .with_action(
                Action::new(
                    ActionKind::Title,
                    format!("Title is only {} characters", chars),
                    title.clone(),
                    lengthen_title(title),
                    "Titles in the 50-60 character range earn more impressions and clicks in search.",
                ),
            )
        } else if chars > MAX_CHARS {
            RuleOutcome::issue(
                PENALTY_TOO_LONG,
                "Title may be truncated on mobile devices. Keep it under 60 characters for best results.",
            )
            .with_action(Action::new(
                ActionKind::Title,
                format!("Title is {} characters and gets cut off in search results", chars),
                title.clone(),
                truncate_title(title),
                "Mobile search results truncate titles at roughly 60 characters.",
            ))
        } else {
            RuleOutcome::strength("Title length is optimal for search visibility.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::good_video;
    use super::*;

    #[test]
    fn positive_short_title_penalized() {
        let mut video = good_video();
        video.snippet.title = "my vlog".to_string();
        let outcome = TitleLengthRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 12);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.actions.len(), 1);
        assert_eq!(outcome.actions[0].kind, ActionKind::Title);
        assert_ne!(outcome.actions[0].recommended, video.snippet.title);
    }

    #[test]
    fn positive_long_title_penalized_with_truncation() {
        let mut video = good_video();
        video.snippet.title = "t".repeat(85);
        let outcome = TitleLengthRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 8);
        assert!(outcome.actions[0].recommended.chars().count() <= 60);
    }

    #[test]
    fn negative_in_range_is_a_strength() {
        let outcome = TitleLengthRule::new().evaluate(&good_video());
        assert_eq!(outcome.penalty, 0);
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.strengths.len(), 1);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let rule = TitleLengthRule::new();
        let mut video = good_video();

        video.snippet.title = "x".repeat(30);
        assert_eq!(rule.evaluate(&video).penalty, 0);

        video.snippet.title = "x".repeat(70);
        assert_eq!(rule.evaluate(&video).penalty, 0);

        video.snippet.title = "x".repeat(29);
        assert_eq!(rule.evaluate(&video).penalty, 12);

        video.snippet.title = "x".repeat(71);
        assert_eq!(rule.evaluate(&video).penalty, 8);
    }

    #[test]
    fn empty_title_is_just_short() {
        let mut video = good_video();
        video.snippet.title = String::new();
        let outcome = TitleLengthRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 12);
    }
}
