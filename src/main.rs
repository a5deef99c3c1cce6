//! Vidscore: YouTube SEO Analyzer CLI

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use vidscore::analyzer::engine::AggregateStats;
use vidscore::analyzer::AnalysisEngine;
use vidscore::config::{load_config, write_default_config, Config};
use vidscore::reporter::{ConsoleReporter, JsonReporter, MarkdownReporter};
use vidscore::resolver;
use vidscore::youtube::{YouTubeClient, YouTubeError};
use vidscore::{Contact, VideoRecord};

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_MONTHS: u32 = 3;

/// Vidscore: find a channel's worst-performing videos and fix them
#[derive(Parser, Debug)]
#[command(name = "vidscore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Channel URL, @handle, or channel id (omit when using --from-json)
    #[arg(required_unless_present_any = ["from_json"])]
    input: Option<String>,

    /// Analyze a saved `videos` API response instead of fetching
    #[arg(long, value_name = "FILE")]
    from_json: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// How many worst performers to keep (default: 10)
    #[arg(long, short)]
    limit: Option<usize>,

    /// Recency window in months (default: 3)
    #[arg(long)]
    months: Option<u32>,

    /// YouTube Data API key (or set YOUTUBE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Minimum average score (exit 1 if the channel falls below)
    #[arg(long, short = 't')]
    min_score: Option<u8>,

    /// Write a Markdown report to this path
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Recipient name stamped on the report
    #[arg(long)]
    name: Option<String>,

    /// Recipient email stamped on the report
    #[arg(long)]
    email: Option<String>,

    /// Quiet mode (one line per video)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (strengths and full action details)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .vidscorerc.json upward)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .vidscorerc.json with sensible defaults
    Init {
        /// Minimum average score threshold (e.g. 70)
        #[arg(long)]
        min_score: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        match cmd {
            Commands::Init { min_score, dir } => {
                return run_init(min_score, dir.as_deref());
            }
        }
    }

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(
        args.api_key.clone(),
        args.limit,
        args.months,
        args.min_score,
    );

    let limit = config.limit.unwrap_or(DEFAULT_LIMIT);
    let months = config.months.unwrap_or(DEFAULT_MONTHS);

    let videos = if let Some(ref path) = args.from_json {
        load_videos_from_file(path)?
    } else {
        fetch_videos(&args, &config, months)?
    };

    if videos.is_empty() {
        anyhow::bail!("No videos to analyze.");
    }

    let engine = AnalysisEngine::new();
    let worst = engine.rank_worst(&videos, limit);
    let stats = AggregateStats::from_results(&worst);

    if args.json {
        let reporter = JsonReporter::new();
        println!("{}", reporter.report_with_summary(&worst, &stats));
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &worst {
            reporter.report_quiet(result);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        reporter.report_many(&worst, &stats);
    }

    if let Some(ref path) = args.report {
        let contact = Contact {
            name: args.name.clone().unwrap_or_default(),
            email: args.email.clone().unwrap_or_default(),
        };
        let doc = MarkdownReporter::new().render(&worst, &contact, Utc::now());
        std::fs::write(path, doc)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        if !args.quiet {
            eprintln!("{}: Report written to {}", "Info".blue(), path.display());
        }
    }

    if let Some(min) = config.min_score {
        if stats.average_score < min {
            if !args.quiet {
                eprintln!(
                    "{}: Average score {} is below the minimum of {}",
                    "Warning".yellow(),
                    stats.average_score,
                    min
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_init(min_score: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let target = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let path = write_default_config(&target, min_score)?;
    println!("Created {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn fetch_videos(args: &Args, config: &Config, months: u32) -> Result<Vec<VideoRecord>> {
    let input = args
        .input
        .as_deref()
        .expect("input required when not using --from-json");

    let identifier = resolver::resolve(input.trim()).ok_or(YouTubeError::InvalidIdentifier)?;
    let client = match config.resolve_api_key() {
        Some(key) => YouTubeClient::with_key(key),
        None => return Err(YouTubeError::NoApiKey.into()),
    };

    Ok(client.fetch_recent_videos(&identifier, months)?)
}

/// Accepts either a raw array of videos or a full `videos` endpoint
/// response with an `items` wrapper.
fn load_videos_from_file(path: &Path) -> Result<Vec<VideoRecord>> {
    #[derive(Deserialize)]
    struct ItemsWrapper {
        items: Vec<VideoRecord>,
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read video file: {}", path.display()))?;

    if let Ok(list) = serde_json::from_str::<Vec<VideoRecord>>(&content) {
        return Ok(list);
    }
    let wrapper: ItemsWrapper = serde_json::from_str(&content)
        .with_context(|| format!("Invalid video JSON in {}", path.display()))?;
    Ok(wrapper.items)
}
