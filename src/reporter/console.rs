//! Console reporter with colored output

use chrono::{DateTime, Utc};
use colored::Colorize;

use super::{format_age, format_compact};
use crate::analyzer::engine::AggregateStats;
use crate::analyzer::ScoreCalculator;
use crate::{Action, AnalyzedVideo, ScoreBand};

/// How many actions each video card shows.
const TOP_ACTIONS: usize = 3;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report the ranked list with a summary block
    pub fn report_many(&self, results: &[AnalyzedVideo], stats: &AggregateStats) {
        let now = Utc::now();
        println!();
        println!(
            "{}",
            format!(
                "Videos that need your attention ({} lowest performers)",
                results.len()
            )
            .bold()
        );

        for (index, result) in results.iter().enumerate() {
            println!("{}", "─".repeat(60));
            self.report(index + 1, result, now);
        }

        self.print_summary(stats);
    }

    /// Report one video card
    pub fn report(&self, rank: usize, result: &AnalyzedVideo, now: DateTime<Utc>) {
        let analysis = &result.analysis;
        let stats = &result.video.statistics;

        println!();
        println!("{}", format!("{}. {}", rank, result.video.snippet.title).bold());
        println!(
            "   Views: {} | Likes: {} | Comments: {} | {}",
            format_compact(stats.view_count),
            format_compact(stats.like_count),
            format_compact(stats.comment_count),
            format_age(&result.video.snippet.published_at, now)
        );
        println!();

        let badge = format!("{}/100 · {}", analysis.score, analysis.band().label());
        println!(
            "   Score: {} {}",
            self.create_score_bar(analysis.score),
            self.colorize_band(&badge, analysis.band()).bold()
        );
        println!(
            "   {}",
            ScoreCalculator::band_description(analysis.band()).dimmed()
        );
        println!();

        if !analysis.issues.is_empty() {
            println!("   {}", "Issues:".bold());
            for issue in &analysis.issues {
                println!("   {} {}", "⚠".yellow(), issue);
            }
            println!();
        }

        if !analysis.strengths.is_empty() {
            if self.verbose {
                println!("   {}", "Working well:".bold());
                for strength in &analysis.strengths {
                    println!("   {} {}", "✓".green(), strength);
                }
                println!();
            } else {
                println!(
                    "   {} {} things working well (use --verbose to show)",
                    "✓".green(),
                    analysis.strengths.len()
                );
                println!();
            }
        }

        if !analysis.specific_actions.is_empty() {
            println!("   {}", "Recommended actions:".bold());
            for action in analysis.specific_actions.iter().take(TOP_ACTIONS) {
                self.print_action(action);
            }
            let remaining = analysis.specific_actions.len().saturating_sub(TOP_ACTIONS);
            if remaining > 0 {
                println!(
                    "   {} {} more action(s) in the exported report",
                    "→".dimmed(),
                    remaining
                );
            }
            println!();
        }
    }

    /// One line per video: title, score, band
    pub fn report_quiet(&self, result: &AnalyzedVideo) {
        let band = result.analysis.band();
        println!(
            "{}: {} ({})",
            result.video.snippet.title,
            result.analysis.score,
            self.colorize_band(band.label(), band)
        );
    }

    fn print_action(&self, action: &Action) {
        println!("   {} {}", "→".cyan(), action.issue.bold());
        if !action.current.is_empty() {
            println!("       Current:   {}", action.current.dimmed());
        }
        println!("       Optimized: {}", action.recommended.green());

        if self.verbose {
            println!("       {} {}", "↳".dimmed(), action.why.dimmed());
            for list in [&action.alternatives, &action.add_these, &action.actions, &action.suggestions]
                .into_iter()
                .flatten()
            {
                for entry in list {
                    println!("         - {}", entry.italic());
                }
            }
            if let Some(ref template) = action.template {
                for line in template.lines() {
                    println!("         {}", line.italic());
                }
            }
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Videos analyzed: {}",
            stats.videos_analyzed.to_string().bold()
        );
        let band = ScoreBand::from_score(stats.average_score);
        println!(
            "   Average score:   {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_band(band.label(), band)
        );
        println!("   Total issues:    {}", stats.total_issues);
        println!();
    }

    fn colorize_band(&self, text: &str, band: ScoreBand) -> colored::ColoredString {
        if !self.use_colors {
            return text.normal();
        }
        match band {
            ScoreBand::Good => text.green(),
            ScoreBand::NeedsWork => text.yellow(),
            ScoreBand::Poor => text.red(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            match ScoreBand::from_score(score) {
                ScoreBand::Good => bar.green().to_string(),
                ScoreBand::NeedsWork => bar.yellow().to_string(),
                ScoreBand::Poor => bar.red().to_string(),
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
