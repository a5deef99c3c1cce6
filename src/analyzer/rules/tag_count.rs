//! Video tag counts: 8-20 tags keeps relevance without dilution.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::tag_suggestions;
use crate::{Action, ActionKind, VideoRecord};

const MIN_COUNT: usize = 8;
const MAX_COUNT: usize = 20;
const PENALTY_TOO_FEW: u32 = 12;
const PENALTY_TOO_MANY: u32 = 5;

/// Rule for tag counts outside the 8-20 range
pub struct TagCountRule;

impl TagCountRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TagCountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for TagCountRule {
    fn name(&self) -> &'static str {
        "tag-count"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let tags = &video.snippet.tags;
        let title = &video.snippet.title;
        let count = tags.len();

        if count < MIN_COUNT {
            RuleOutcome::issue(
                PENALTY_TOO_FEW,
                "Add more tags. Use 10-15 relevant tags including broad and specific keywords.",
            )
            .with_action(
                Action::new(
                    ActionKind::Tags,
                    format!("Only {} tag(s) set", count),
                    tags.join(", "),
                    "Add the generated tags below, broad terms first",
                    "Tags still feed the recommendation system's understanding of the video's topic.",
                )
                .with_add_these(tag_suggestions(title)),
            )
        } else if count > MAX_COUNT {
            RuleOutcome::issue(
                PENALTY_TOO_MANY,
                "Too many tags can dilute relevance. Focus on 10-15 highly relevant tags.",
            )
            .with_action(Action::new(
                ActionKind::Tags,
                format!("{} tags dilute topical relevance", count),
                tags.join(", "),
                "Keep the 12 most relevant tags and drop the rest",
                "Past roughly 15 tags each extra tag weakens the signal of all the others.",
            ))
        } else {
            RuleOutcome::strength("Tag count is in the optimal range.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::good_video;
    use super::*;

    #[test]
    fn positive_too_few_gets_generated_tags() {
        let mut video = good_video();
        video.snippet.tags = vec!["rust".to_string(), "tips".to_string()];
        let outcome = TagCountRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 12);
        let add_these = outcome.actions[0].add_these.as_ref().unwrap();
        assert!(add_these.len() <= 12);
        // Generated list is duplicate-free
        let mut deduped = add_these.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), add_these.len());
    }

    #[test]
    fn positive_no_tags_at_all() {
        let mut video = good_video();
        video.snippet.tags.clear();
        let outcome = TagCountRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 12);
        assert_eq!(outcome.actions[0].current, "");
    }

    #[test]
    fn positive_too_many_says_keep_top_12() {
        let mut video = good_video();
        video.snippet.tags = (1..=25).map(|i| format!("tag{}", i)).collect();
        let outcome = TagCountRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 5);
        assert!(outcome.actions[0].recommended.contains("12"));
    }

    #[test]
    fn negative_in_range_is_a_strength() {
        let outcome = TagCountRule::new().evaluate(&good_video());
        assert_eq!(outcome.penalty, 0);
        assert_eq!(outcome.strengths.len(), 1);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let rule = TagCountRule::new();
        let mut video = good_video();

        video.snippet.tags = (1..=8).map(|i| format!("t{}", i)).collect();
        assert_eq!(rule.evaluate(&video).penalty, 0);

        video.snippet.tags = (1..=20).map(|i| format!("t{}", i)).collect();
        assert_eq!(rule.evaluate(&video).penalty, 0);

        video.snippet.tags = (1..=21).map(|i| format!("t{}", i)).collect();
        assert_eq!(rule.evaluate(&video).penalty, 5);
    }
}
