//! Timestamps in descriptions drive chapters, retention and engagement.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::timestamp_template;
use crate::{Action, ActionKind, VideoRecord};
use regex::Regex;

const PENALTY: u32 = 8;

/// Rule for descriptions without a `M:SS`-style timestamp
pub struct TimestampsRule {
    pattern: Regex,
}

impl TimestampsRule {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\d{1,2}:\d{2}").unwrap(),
        }
    }
}

impl Default for TimestampsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for TimestampsRule {
    fn name(&self) -> &'static str {
        "timestamps"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let description = &video.snippet.description;

        if self.pattern.is_match(description) {
            RuleOutcome::strength(
                "Timestamps included - helps with user experience and watch time!",
            )
        } else {
            RuleOutcome::issue(
                PENALTY,
                "Add timestamps to your description. Videos with timestamps get 15% more engagement.",
            )
            .with_action(
                Action::new(
                    ActionKind::Description,
                    "No timestamps in the description",
                    description.clone(),
                    "Add a chapter list using the template below",
                    "Timestamps create chapter markers, which improve retention and can surface in search.",
                )
                .with_template(timestamp_template()),
            )
        }
    }
}
