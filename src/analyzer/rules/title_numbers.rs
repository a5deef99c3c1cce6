//! Numbers in titles reliably raise click-through.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::numbered_variants;
use crate::{Action, ActionKind, VideoRecord};

const PENALTY: u32 = 4;

/// Rule for titles without a digit
pub struct TitleNumbersRule;

impl TitleNumbersRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TitleNumbersRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for TitleNumbersRule {
    fn name(&self) -> &'static str {
        "title-numbers"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let title = &video.snippet.title;

        if title.chars().any(|c| c.is_ascii_digit()) {
            RuleOutcome::strength(
                "Title contains numbers, which typically increases click-through rate by 20-30%.",
            )
        } else {
            RuleOutcome::issue(
                PENALTY,
                "Titles with numbers get more clicks. Try a listicle angle or add the year.",
            )
            .with_action(
                Action::new(
                    ActionKind::Title,
                    "No numbers in the title",
                    title.clone(),
                    numbered_variants(title)[0].clone(),
                    "Concrete numbers set expectations and stand out in a results page.",
                )
                .with_suggestions(numbered_variants(title)),
            )
        }
    }
}
