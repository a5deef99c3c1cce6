//! SEO rule checks applied to every video.

pub mod comment_ratio;
pub mod description_length;
pub mod engagement;
pub mod hashtags;
pub mod links;
pub mod power_words;
pub mod tag_count;
pub mod thumbnail;
pub mod timestamps;
pub mod title_brackets;
pub mod title_case;
pub mod title_length;
pub mod title_numbers;

pub use comment_ratio::CommentRatioRule;
pub use description_length::DescriptionLengthRule;
pub use engagement::EngagementRule;
pub use hashtags::HashtagsRule;
pub use links::LinksRule;
pub use power_words::PowerWordsRule;
pub use tag_count::TagCountRule;
pub use thumbnail::ThumbnailRule;
pub use timestamps::TimestampsRule;
pub use title_brackets::TitleBracketsRule;
pub use title_case::TitleCaseRule;
pub use title_length::TitleLengthRule;
pub use title_numbers::TitleNumbersRule;

use crate::{Action, VideoRecord};

/// What one rule found for one video.
#[derive(Debug, Default)]
pub struct RuleOutcome {
    /// Points to subtract from the starting score of 100.
    pub penalty: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
    pub actions: Vec<Action>,
}

impl RuleOutcome {
    /// Nothing to report.
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn strength(message: impl Into<String>) -> Self {
        Self {
            strengths: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn issue(penalty: u32, message: impl Into<String>) -> Self {
        Self {
            penalty,
            issues: vec![message.into()],
            ..Self::default()
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// Trait for SEO rules.
///
/// Rules are independent, side-effect free, and total: any well-formed
/// [`VideoRecord`] produces an outcome, never an error. The engine runs
/// every rule on every video; no rule short-circuits another.
pub trait SeoRule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Evaluate one video
    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome;
}
