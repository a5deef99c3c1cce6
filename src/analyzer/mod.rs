//! Analyzer module - SEO scoring engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{AggregateStats, AnalysisEngine};
pub use scoring::ScoreCalculator;
