//! Markdown report export: the downloadable document handed to leads.
//!
//! Layout follows the branded PDF it replaces: title and date, a
//! prepared-for card, an executive summary with the average score, one
//! card per video with its top three actions, and a closing footer.

use chrono::{DateTime, Utc};

use super::format_metric;
use crate::analyzer::engine::AggregateStats;
use crate::analyzer::ScoreCalculator;
use crate::{AnalyzedVideo, Contact, ScoreBand};

/// Actions shown per video card.
const TOP_ACTIONS: usize = 3;
/// Card headings truncate long titles at this many characters.
const TITLE_DISPLAY_LIMIT: usize = 65;

/// Reporter building the exportable Markdown document
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the full document
    pub fn render(
        &self,
        results: &[AnalyzedVideo],
        contact: &Contact,
        generated_on: DateTime<Utc>,
    ) -> String {
        let stats = AggregateStats::from_results(results);
        let band = ScoreBand::from_score(stats.average_score);
        let mut doc = String::new();

        doc.push_str("# YouTube SEO Analysis Report\n\n");
        doc.push_str(&format!(
            "Generated on {}\n\n",
            generated_on.format("%B %-d, %Y")
        ));

        doc.push_str(&format!(
            "**Prepared for:** {}  \n{}\n\n",
            fallback(&contact.name),
            fallback(&contact.email)
        ));

        doc.push_str("## Executive Summary\n\n");
        doc.push_str(&format!(
            "This report analyzes {} video{} from your YouTube channel, providing \
             actionable SEO recommendations to improve visibility, engagement, and \
             search rankings.\n\n",
            results.len(),
            if results.len() == 1 { "" } else { "s" }
        ));
        doc.push_str(&format!(
            "**Average SEO Score: {}/100 ({})**\n\n{}\n\n",
            stats.average_score,
            ScoreCalculator::band_description(band)
                .split(" - ")
                .next()
                .unwrap_or(""),
            "Each video below is scored against title, description, tag, and \
             engagement heuristics; the list is ordered worst-first."
        ));

        for (index, result) in results.iter().enumerate() {
            doc.push_str("---\n\n");
            self.render_video_card(&mut doc, index + 1, result);
        }

        doc.push_str("---\n\n");
        doc.push_str(
            "Every recommendation in this report is copy-paste ready. Apply the top \
             action on each video first; titles and descriptions take effect on the \
             next crawl.\n\n",
        );
        doc.push_str("_Generated by vidscore_\n");

        doc
    }

    fn render_video_card(&self, doc: &mut String, rank: usize, result: &AnalyzedVideo) {
        let title = display_title(&result.video.snippet.title);
        let analysis = &result.analysis;
        let stats = &result.video.statistics;

        doc.push_str(&format!("## {}. {}\n\n", rank, title));
        doc.push_str(&format!(
            "**Score: {}/100 ({})** | Views: {} | Likes: {} | Comments: {}\n\n",
            analysis.score,
            analysis.band().label(),
            format_metric(stats.view_count),
            format_metric(stats.like_count),
            format_metric(stats.comment_count),
        ));

        if analysis.specific_actions.is_empty() {
            doc.push_str("_No specific recommendations available._\n\n");
            return;
        }

        doc.push_str("### Recommended Actions\n\n");
        for action in analysis.specific_actions.iter().take(TOP_ACTIONS) {
            doc.push_str(&format!("- **{}**\n", action.issue));
            if !action.current.is_empty() {
                doc.push_str(&format!("  - Current: {}\n", single_line(&action.current)));
            }
            doc.push_str(&format!(
                "  - Optimized: {}\n",
                single_line(&action.recommended)
            ));
        }
        doc.push('\n');
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn fallback(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn display_title(title: &str) -> String {
    if title.chars().count() > TITLE_DISPLAY_LIMIT {
        let cut: String = title.chars().take(TITLE_DISPLAY_LIMIT).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
