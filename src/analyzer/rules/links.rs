//! Links in descriptions route viewers somewhere you own.

use super::{RuleOutcome, SeoRule};
use crate::suggestions::link_checklist;
use crate::{Action, ActionKind, VideoRecord};

const PENALTY: u32 = 6;

/// Rule for descriptions without an http(s) link
pub struct LinksRule;

impl LinksRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinksRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for LinksRule {
    fn name(&self) -> &'static str {
        "links"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        let description = &video.snippet.description;

        if description.contains("http://") || description.contains("https://") {
            RuleOutcome::strength("Links included in description.")
        } else {
            RuleOutcome::issue(
                PENALTY,
                "No links in description. Add your social media, website, or affiliate links.",
            )
            .with_action(
                Action::new(
                    ActionKind::Description,
                    "No links in the description",
                    description.clone(),
                    "Add at least your website and one related video",
                    "Every description is free real estate for traffic you control.",
                )
                .with_actions(link_checklist()),
            )
        }
    }
}
