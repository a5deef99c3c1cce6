//! Property tests for the scoring engine and suggestion generators.

use proptest::prelude::*;
use vidscore::analyzer::AnalysisEngine;
use vidscore::suggestions::{hashtag_suggestions, tag_suggestions, to_title_case};
use vidscore::{ActionKind, Snippet, Statistics, VideoRecord};

fn make_video(
    title: String,
    description: String,
    tags: Vec<String>,
    views: u64,
    likes: u64,
    comments: u64,
) -> VideoRecord {
    VideoRecord {
        id: "prop".to_string(),
        snippet: Snippet {
            title,
            description,
            tags,
            published_at: "2026-07-01T00:00:00Z".to_string(),
            ..Snippet::default()
        },
        statistics: Statistics {
            view_count: views,
            like_count: likes,
            comment_count: comments,
        },
    }
}

proptest! {
    #[test]
    fn score_stays_in_bounds(
        title in "[ -~]{0,120}",
        description in "[ -~]{0,400}",
        tags in prop::collection::vec("[a-z ]{1,12}", 0..30),
        views in 0u64..10_000_000,
        likes in 0u64..1_000_000,
        comments in 0u64..100_000,
    ) {
        let video = make_video(title, description, tags, views, likes, comments);
        let analysis = AnalysisEngine::new().analyze(&video);
        prop_assert!(analysis.score <= 100);
    }

    #[test]
    fn zero_views_never_produce_engagement_findings(
        title in "[ -~]{0,120}",
        description in "[ -~]{0,400}",
        likes in 0u64..1_000_000,
        comments in 0u64..100_000,
    ) {
        let video = make_video(title, description, vec![], 0, likes, comments);
        let analysis = AnalysisEngine::new().analyze(&video);
        prop_assert!(!analysis.issues.iter().any(|i| i.contains("engagement rate")));
        prop_assert!(!analysis.issues.iter().any(|i| i.contains("Very few comments")));
        prop_assert!(!analysis
            .specific_actions
            .iter()
            .any(|a| a.kind == ActionKind::Engagement));
    }

    #[test]
    fn analysis_is_deterministic(
        title in "[ -~]{0,80}",
        description in "[ -~]{0,200}",
        views in 0u64..1_000_000,
        likes in 0u64..100_000,
    ) {
        let video = make_video(title, description, vec![], views, likes, 0);
        let engine = AnalysisEngine::new();
        let first = engine.analyze(&video);
        let second = engine.analyze(&video);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.issues, second.issues);
        prop_assert_eq!(first.strengths, second.strengths);
    }

    #[test]
    fn title_case_is_idempotent(input in "[ -~]{0,100}") {
        let once = to_title_case(&input);
        let twice = to_title_case(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tag_suggestions_unique_and_at_most_twelve(title in "[ -~]{0,120}") {
        let tags = tag_suggestions(&title);
        prop_assert!(tags.len() <= 12);
        let mut deduped = tags.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), tags.len());
    }

    #[test]
    fn hashtag_suggestions_at_most_five(title in "[ -~]{0,120}") {
        let hashtags = hashtag_suggestions(&title);
        prop_assert!(hashtags.len() <= 5);
        prop_assert!(hashtags.iter().all(|h| h.starts_with('#')));
    }
}
