//! Power words in titles ("best", "ultimate", ...) lift click-through.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::power_word_alternatives;
use crate::{Action, ActionKind, VideoRecord};

/// Case-insensitive substring matches against the lowercased title.
const POWER_WORDS: [&str; 9] = [
    "best", "top", "ultimate", "complete", "guide", "how to", "tutorial", "review", "vs",
];
const PENALTY: u32 = 5;

/// Rule for titles without any proven click-through term
pub struct PowerWordsRule;

impl PowerWordsRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PowerWordsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for PowerWordsRule {
    fn name(&self) -> &'static str {
        "power-words"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let title = &video.snippet.title;
        let lowered = title.to_lowercase();

        if POWER_WORDS.iter().any(|word| lowered.contains(word)) {
            RuleOutcome::strength("Title uses engaging power words.")
        } else {
            let alternatives = power_word_alternatives(title);
            RuleOutcome::issue(
                PENALTY,
                "Consider adding power words like 'Best', 'Ultimate', 'Complete Guide' to improve CTR.",
            )
            .with_action(
                Action::new(
                    ActionKind::Title,
                    "No power words in the title",
                    title.clone(),
                    alternatives[0].clone(),
                    "Titles with terms like 'best' or 'guide' consistently win more clicks for the same ranking.",
                )
                .with_alternatives(alternatives),
            )
        }
    }
}
