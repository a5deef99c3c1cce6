//! Hashtag usage in descriptions: 3-5 is discovery, 16+ is spam.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::hashtag_suggestions;
use crate::{Action, ActionKind, VideoRecord};
use regex::Regex;

const MIN_COUNT: usize = 3;
const MAX_COUNT: usize = 15;
const PENALTY_TOO_FEW: u32 = 7;
const PENALTY_TOO_MANY: u32 = 5;

/// Rule for hashtag counts outside the 3-15 range
pub struct HashtagsRule {
    pattern: Regex,
}

impl HashtagsRule {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"#\w+").unwrap(),
        }
    }
}

impl Default for HashtagsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for HashtagsRule {
    fn name(&self) -> &'static str {
        "hashtags"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let description = &video.snippet.description;
        let title = &video.snippet.title;
        let count = self.pattern.find_iter(description).count();

        if count < MIN_COUNT {
            RuleOutcome::issue(
                PENALTY_TOO_FEW,
                "Use 3-5 relevant hashtags in description for better discoverability.",
            )
            .with_action(
                Action::new(
                    ActionKind::Description,
                    format!("Only {} hashtag(s) in the description", count),
                    description.clone(),
                    "Add 3-5 hashtags from the suggestions below",
                    "The first three hashtags show above the title and feed the hashtag search pages.",
                )
                .with_suggestions(hashtag_suggestions(title)),
            )
        } else if count > MAX_COUNT {
            RuleOutcome::issue(
                PENALTY_TOO_MANY,
                "Too many hashtags can be seen as spam. Stick to 3-5 most relevant ones.",
            )
        } else {
            RuleOutcome::strength("Good hashtag usage for discoverability.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::good_video;
    use super::*;

    #[test]
    fn positive_too_few_gets_suggestions() {
        let mut video = good_video();
        video.snippet.description = "No tags here, just #one".to_string();
        let outcome = HashtagsRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 7);
        let suggestions = outcome.actions[0].suggestions.as_ref().unwrap();
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
    }

    #[test]
    fn positive_too_many_is_a_bare_warning() {
        let mut video = good_video();
        video.snippet.description = (1..=16)
            .map(|i| format!("#tag{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let outcome = HashtagsRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 5);
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn negative_in_range_is_a_strength() {
        let outcome = HashtagsRule::new().evaluate(&good_video());
        assert_eq!(outcome.penalty, 0);
        assert_eq!(outcome.strengths.len(), 1);
    }

    #[test]
    fn bare_hash_without_word_does_not_count() {
        let mut video = good_video();
        video.snippet.description = "# # # nothing tagged".to_string();
        let outcome = HashtagsRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 7);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let rule = HashtagsRule::new();
        let mut video = good_video();

        video.snippet.description = "#a #b #c".to_string();
        assert_eq!(rule.evaluate(&video).penalty, 0);

        video.snippet.description = (1..=15)
            .map(|i| format!("#t{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rule.evaluate(&video).penalty, 0);
    }
}
