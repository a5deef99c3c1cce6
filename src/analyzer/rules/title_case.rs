//! Title casing: all-lowercase and ALL-CAPS titles read as low effort.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::to_title_case;
use crate::{Action, ActionKind, VideoRecord};

const PENALTY: u32 = 5;

/// Rule for titles that never mix upper- and lowercase letters
pub struct TitleCaseRule;

impl TitleCaseRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TitleCaseRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for TitleCaseRule {
    fn name(&self) -> &'static str {
        "title-case"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let title = &video.snippet.title;
        let has_upper = title.chars().any(|c| c.is_uppercase());
        let has_lower = title.chars().any(|c| c.is_lowercase());

        if has_upper && has_lower {
            return RuleOutcome::clean();
        }

        RuleOutcome::issue(
            PENALTY,
            "Title is written in all lowercase or all caps. Use Title Case for better readability.",
        )
        .with_action(Action::new(
            ActionKind::Title,
            "Title casing hurts readability",
            title.clone(),
            to_title_case(title),
            "Title Case reads as more professional and is easier to scan in search results.",
        ))
    }
}
