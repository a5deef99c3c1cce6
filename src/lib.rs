//! Vidscore: YouTube SEO Analyzer
//!
//! This library scores a channel's recent uploads against a fixed set of
//! SEO heuristics and produces ranked, copy-paste-ready recommendations
//! for the worst performers.

pub mod analyzer;
pub mod config;
pub mod reporter;
pub mod resolver;
pub mod suggestions;
pub mod youtube;

use serde::{Deserialize, Serialize};

/// A video as returned by the public `videos?part=snippet,statistics`
/// endpoint. The field layout mirrors the wire shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Statistics,
}

/// Video metadata: title, description, tags, publish date, thumbnails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Absent on the wire when a video has no tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// RFC 3339 publish timestamp, kept as the wire string.
    #[serde(default)]
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Thumbnails::is_empty")]
    pub thumbnails: Thumbnails,
}

/// Thumbnail variants by resolution. Only the ones the analyzer and
/// reporters look at are modeled; unknown variants are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    pub fn is_empty(&self) -> bool {
        self.default.is_none()
            && self.medium.is_none()
            && self.high.is_none()
            && self.maxres.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

/// View/like/comment counts. The API serves these as JSON strings;
/// numbers are accepted too, and anything unparsable becomes 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, deserialize_with = "stat_count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "stat_count")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "stat_count")]
    pub comment_count: u64,
}

impl Statistics {
    /// Likes as a percentage of views. `None` when the video has no views,
    /// so callers never divide by zero.
    pub fn like_ratio_pct(&self) -> Option<f64> {
        if self.view_count == 0 {
            None
        } else {
            Some(self.like_count as f64 / self.view_count as f64 * 100.0)
        }
    }

    /// Comments as a percentage of views. `None` when the video has no views.
    pub fn comment_ratio_pct(&self) -> Option<f64> {
        if self.view_count == 0 {
            None
        } else {
            Some(self.comment_count as f64 / self.view_count as f64 * 100.0)
        }
    }
}

fn stat_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s.parse().unwrap_or(0),
        Some(serde_json::Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    })
}

/// The outcome of scoring one video: a 0-100 score plus categorized
/// findings and copy-paste remediation actions.
///
/// The score starts at 100 and only ever loses points; it is clamped
/// into [0, 100] and never incremented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    pub score: u8,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
    pub specific_actions: Vec<Action>,
}

impl SeoAnalysis {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Which metadata field an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Title,
    Description,
    Tags,
    Engagement,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Title => write!(f, "title"),
            ActionKind::Description => write!(f, "description"),
            ActionKind::Tags => write!(f, "tags"),
            ActionKind::Engagement => write!(f, "engagement"),
        }
    }
}

/// A structured, copy-paste-ready remediation tied to one failed rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub issue: String,
    pub current: String,
    pub recommended: String,
    pub why: String,
    /// Alternative rewrites of the whole field (titles mostly).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
    /// A complete replacement block to paste in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Entries to append to the current value (tags).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_these: Option<Vec<String>>,
    /// Checklist of concrete steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Generated candidates to pick from (hashtags, numeric titles).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Action {
    pub fn new(
        kind: ActionKind,
        issue: impl Into<String>,
        current: impl Into<String>,
        recommended: impl Into<String>,
        why: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            issue: issue.into(),
            current: current.into(),
            recommended: recommended.into(),
            why: why.into(),
            alternatives: None,
            template: None,
            add_these: None,
            actions: None,
            suggestions: None,
        }
    }

    pub fn with_alternatives(mut self, alternatives: Vec<String>) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    pub fn with_template(mut self, template: String) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_add_these(mut self, add_these: Vec<String>) -> Self {
        self.add_these = Some(add_these);
        self
    }

    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }
}

/// Score band used for badges and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    Good,
    NeedsWork,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => ScoreBand::Good,
            50..=74 => ScoreBand::NeedsWork,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "Good SEO",
            ScoreBand::NeedsWork => "Needs Work",
            ScoreBand::Poor => "Poor SEO",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A video paired with its analysis and ranking key. Serializes with the
/// video fields spread at the top level, matching the shape the rendering
/// layer consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedVideo {
    #[serde(flatten)]
    pub video: VideoRecord,
    pub analysis: SeoAnalysis,
    /// Lower is worse: views, engagement and SEO score combined.
    pub performance_score: f64,
}

/// Recipient details stamped onto an exported report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}
