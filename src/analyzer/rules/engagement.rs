//! Like-ratio engagement check. Skipped entirely for videos with no
//! views so there is never a division by zero.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::cta_checklist;
use crate::{Action, ActionKind, VideoRecord};

const LOW_BELOW_PCT: f64 = 1.5;
const EXCELLENT_FROM_PCT: f64 = 3.0;
const PENALTY_LOW: u32 = 8;

/// Rule for a weak likes-to-views ratio
pub struct EngagementRule;

impl EngagementRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EngagementRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for EngagementRule {
    fn name(&self) -> &'static str {
        "engagement"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let Some(like_ratio) = video.statistics.like_ratio_pct() else {
            return RuleOutcome::clean();
        };

        if like_ratio < LOW_BELOW_PCT {
            RuleOutcome::issue(
                PENALTY_LOW,
                format!(
                    "Low engagement rate ({:.2}% likes). Add clear CTAs asking viewers to like.",
                    like_ratio
                ),
            )
            .with_action(
                Action::new(
                    ActionKind::Engagement,
                    format!("Like ratio is {:.2}%, below the 1.5% baseline", like_ratio),
                    format!(
                        "{} likes on {} views",
                        video.statistics.like_count, video.statistics.view_count
                    ),
                    "Work explicit like reminders into the video itself",
                    "Viewers like twice as often when asked directly; the algorithm reads likes as quality.",
                )
                .with_actions(cta_checklist()),
            )
        } else if like_ratio >= EXCELLENT_FROM_PCT {
            RuleOutcome::strength(format!(
                "Excellent engagement rate! ({:.2}% likes) - Keep doing what you're doing!",
                like_ratio
            ))
        } else {
            RuleOutcome::strength(format!("Good engagement rate ({:.2}% likes).", like_ratio))
        }
    }
}
