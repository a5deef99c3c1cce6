//! Comment-ratio check for videos with a meaningful view count.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::discussion_prompts;
use crate::{Action, ActionKind, VideoRecord};

/// Below this many views the sample is too small to judge.
const MIN_VIEWS: u64 = 100;
const LOW_BELOW_PCT: f64 = 0.1;
const PENALTY: u32 = 5;

/// Rule for near-silent comment sections
pub struct CommentRatioRule;

impl CommentRatioRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommentRatioRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for CommentRatioRule {
    fn name(&self) -> &'static str {
        "comment-ratio"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        if video.statistics.view_count <= MIN_VIEWS {
            return RuleOutcome::clean();
        }
        let Some(comment_ratio) = video.statistics.comment_ratio_pct() else {
            return RuleOutcome::clean();
        };

        if comment_ratio < LOW_BELOW_PCT {
            RuleOutcome::issue(
                PENALTY,
                "Very few comments. Ask questions in your video to encourage discussion.",
            )
            .with_action(
                Action::new(
                    ActionKind::Engagement,
                    format!("Comment ratio is {:.2}% of views", comment_ratio),
                    format!(
                        "{} comments on {} views",
                        video.statistics.comment_count, video.statistics.view_count
                    ),
                    "Give viewers a concrete reason to comment",
                    "Comments are the strongest engagement signal and seed future recommendations.",
                )
                .with_actions(discussion_prompts()),
            )
        } else {
            RuleOutcome::clean()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::good_video;
    use super::*;

    #[test]
    fn positive_silent_comments_penalized() {
        let mut video = good_video();
        video.statistics.view_count = 50_000;
        video.statistics.comment_count = 10; // 0.02%
        let outcome = CommentRatioRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 5);
        assert!(outcome.actions[0].actions.is_some());
    }

    #[test]
    fn negative_healthy_ratio_is_clean() {
        let outcome = CommentRatioRule::new().evaluate(&good_video()); // 0.3%
        assert_eq!(outcome.penalty, 0);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn small_channels_are_not_judged() {
        let mut video = good_video();
        video.statistics.view_count = 100;
        video.statistics.comment_count = 0;
        let outcome = CommentRatioRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 0);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn zero_views_skips_without_division() {
        let mut video = good_video();
        video.statistics.view_count = 0;
        video.statistics.comment_count = 0;
        let outcome = CommentRatioRule::new().evaluate(&video);
        assert_eq!(outcome.penalty, 0);
        assert!(outcome.actions.is_empty());
    }
}
