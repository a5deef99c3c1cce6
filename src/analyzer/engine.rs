//! Analysis engine - runs every SEO rule over each video

use rayon::prelude::*;

use super::rules::{
    CommentRatioRule, DescriptionLengthRule, EngagementRule, HashtagsRule, LinksRule,
    PowerWordsRule, SeoRule, TagCountRule, ThumbnailRule, TimestampsRule, TitleBracketsRule,
    TitleCaseRule, TitleLengthRule, TitleNumbersRule,
};
use super::ScoreCalculator;
use crate::{AnalyzedVideo, SeoAnalysis, VideoRecord};

/// Batches smaller than this are scored on the calling thread; the
/// per-video work is cheap enough that fan-out only pays past it.
const PARALLEL_THRESHOLD: usize = 8;

/// Main analysis engine that runs all rules in a fixed order
pub struct AnalysisEngine {
    rules: Vec<Box<dyn SeoRule + Send + Sync>>,
}

impl AnalysisEngine {
    /// Create a new analysis engine with the full rule set
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(TitleLengthRule::new()),
                Box::new(PowerWordsRule::new()),
                Box::new(TitleNumbersRule::new()),
                Box::new(TitleCaseRule::new()),
                Box::new(TitleBracketsRule::new()),
                Box::new(DescriptionLengthRule::new()),
                Box::new(TimestampsRule::new()),
                Box::new(LinksRule::new()),
                Box::new(HashtagsRule::new()),
                Box::new(TagCountRule::new()),
                Box::new(EngagementRule::new()),
                Box::new(CommentRatioRule::new()),
                Box::new(ThumbnailRule::new()),
            ],
        }
    }

    /// Score one video. Pure and deterministic: identical input always
    /// produces an identical result. Every rule runs every time.
    pub fn analyze(&self, video: &VideoRecord) -> SeoAnalysis {
        let mut penalty: u32 = 0;
        let mut issues = Vec::new();
        let mut strengths = Vec::new();
        let mut specific_actions = Vec::new();

        for rule in &self.rules {
            let outcome = rule.evaluate(video);
            penalty += outcome.penalty;
            issues.extend(outcome.issues);
            strengths.extend(outcome.strengths);
            specific_actions.extend(outcome.actions);
        }

        SeoAnalysis {
            score: ScoreCalculator::score_from_penalty(penalty),
            issues,
            strengths,
            specific_actions,
        }
    }

    /// Score a batch of videos, in parallel when the batch is large
    /// enough to pay for the fan-out.
    pub fn analyze_many(&self, videos: &[VideoRecord]) -> Vec<AnalyzedVideo> {
        let analyze_one = |video: &VideoRecord| {
            let analysis = self.analyze(video);
            let performance_score = performance_score(video, analysis.score);
            AnalyzedVideo {
                video: video.clone(),
                analysis,
                performance_score,
            }
        };

        if videos.len() > PARALLEL_THRESHOLD {
            videos.par_iter().map(analyze_one).collect()
        } else {
            videos.iter().map(analyze_one).collect()
        }
    }

    /// The worst performers: lowest combined views/engagement/SEO first,
    /// truncated to `limit`.
    pub fn rank_worst(&self, videos: &[VideoRecord], limit: usize) -> Vec<AnalyzedVideo> {
        let mut analyzed = self.analyze_many(videos);
        analyzed.sort_by(|a, b| {
            a.performance_score
                .partial_cmp(&b.performance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        analyzed.truncate(limit);
        analyzed
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranking key: `views * 0.7 + like_ratio_pct * 1000 + seo_score * 10`.
/// Ascending order puts the videos most in need of attention first.
pub fn performance_score(video: &VideoRecord, seo_score: u8) -> f64 {
    let views = video.statistics.view_count as f64;
    let engagement = video.statistics.like_ratio_pct().unwrap_or(0.0);
    views * 0.7 + engagement * 1000.0 + seo_score as f64 * 10.0
}

/// Summary numbers across one analysis run
#[derive(Debug, Clone)]
pub struct AggregateStats {
    pub videos_analyzed: usize,
    pub average_score: u8,
    pub total_issues: usize,
}

impl AggregateStats {
    pub fn from_results(results: &[AnalyzedVideo]) -> Self {
        let videos_analyzed = results.len();
        let average_score = if videos_analyzed == 0 {
            0
        } else {
            let sum: u32 = results.iter().map(|r| r.analysis.score as u32).sum();
            (sum as f64 / videos_analyzed as f64).round() as u8
        };
        let total_issues = results.iter().map(|r| r.analysis.issues.len()).sum();
        Self {
            videos_analyzed,
            average_score,
            total_issues,
        }
    }
}
