//! JSON reporter for machine-readable output

use serde::Serialize;

use crate::analyzer::engine::AggregateStats;
use crate::AnalyzedVideo;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single analyzed video as JSON
    pub fn report(&self, result: &AnalyzedVideo) -> String {
        if self.pretty {
            serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Report the ranked list as a JSON array
    pub fn report_many(&self, results: &[AnalyzedVideo]) -> String {
        if self.pretty {
            serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(results).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Report with summary
    pub fn report_with_summary(
        &self,
        results: &[AnalyzedVideo],
        stats: &AggregateStats,
    ) -> String {
        let output = JsonOutput {
            results,
            summary: JsonSummary {
                videos_analyzed: stats.videos_analyzed,
                average_score: stats.average_score,
                total_issues: stats.total_issues,
            },
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [AnalyzedVideo],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    videos_analyzed: usize,
    average_score: u8,
    total_issues: usize,
}
