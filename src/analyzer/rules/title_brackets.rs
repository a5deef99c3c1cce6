//! Brackets and parentheses in titles highlight the hook.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::bracketed_variants;
use crate::{Action, ActionKind, VideoRecord};
use regex::Regex;

const PENALTY: u32 = 3;

/// Rule for titles without a `[...]` or `(...)` segment
pub struct TitleBracketsRule {
    pattern: Regex,
}

impl TitleBracketsRule {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"[\[(].*[\])]").unwrap(),
        }
    }
}

impl Default for TitleBracketsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for TitleBracketsRule {
    fn name(&self) -> &'static str {
        "title-brackets"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let title = &video.snippet.title;

        if self.pattern.is_match(title) {
            RuleOutcome::strength(
                "Using brackets/parentheses in title - great for highlighting key info!",
            )
        } else {
            RuleOutcome::issue(
                PENALTY,
                "Add a bracketed qualifier like [2026] or (Step by Step) to stand out in search.",
            )
            .with_action(
                Action::new(
                    ActionKind::Title,
                    "No brackets or parentheses in the title",
                    title.clone(),
                    bracketed_variants(title)[0].clone(),
                    "Bracketed qualifiers are proven CTR boosters - they signal freshness or format at a glance.",
                )
                .with_alternatives(bracketed_variants(title)),
            )
        }
    }
}
