//! Description length: search rankings reward 250+ character descriptions.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::{description_template, expansion_checklist};
use crate::{Action, ActionKind, VideoRecord};

const CRITICAL_BELOW: usize = 150;
const THIN_BELOW: usize = 250;
const PENALTY_CRITICAL: u32 = 18;
const PENALTY_THIN: u32 = 10;

/// Rule for short descriptions
pub struct DescriptionLengthRule;

impl DescriptionLengthRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DescriptionLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for DescriptionLengthRule {
    fn name(&self) -> &'static str {
        "description-length"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let description = &video.snippet.description;
        let title = &video.snippet.title;
        let chars = description.chars().count();

        if chars < CRITICAL_BELOW {
            RuleOutcome::issue(
                PENALTY_CRITICAL,
                "Description is critically short. Add at least 250-300 words with timestamps and keywords for better SEO.",
            )
            .with_action(
                Action::new(
                    ActionKind::Description,
                    format!("Description is only {} characters", chars),
                    description.clone(),
                    "Paste the template below and fill in your own links and chapters",
                    "The description is the main text search reads; a near-empty one leaves rankings on the table.",
                )
                .with_template(description_template(title)),
            )
        } else if chars < THIN_BELOW {
            RuleOutcome::issue(
                PENALTY_THIN,
                "Description could be longer. Aim for 250+ words to improve search rankings.",
            )
            .with_action(
                Action::new(
                    ActionKind::Description,
                    format!("Description is {} characters - workable but thin", chars),
                    description.clone(),
                    "Expand the existing description with the checklist below",
                    "More descriptive text gives search more to index without changing the video.",
                )
                .with_actions(expansion_checklist()),
            )
        } else {
            RuleOutcome::strength("Description length is comprehensive.")
        }
    }
}
