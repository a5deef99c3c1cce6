//! High-resolution thumbnail check. Strength only; the API exposes no
//! reliable signal for a custom thumbnail, so absence is not punished.

use super::{RuleOutcome, SeoRule};
use crate::VideoRecord;

/// Rule recording the presence of a maxres thumbnail
pub struct ThumbnailRule;

impl ThumbnailRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThumbnailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoRule for ThumbnailRule {
    fn name(&self) -> &'static str {
        "thumbnail"
    }

    fn evaluate(&self, video: &VideoRecord) -> RuleOutcome {
        if video.snippet.thumbnails.maxres.is_some() {
            RuleOutcome::strength("High-resolution thumbnail available.")
        } else {
            RuleOutcome::clean()
        }
    }
}
