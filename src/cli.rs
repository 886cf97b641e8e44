use clap::{Args, Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "portfolio-rank",
    version,
    about = "Portfolio scoring and top-N ranking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory containing portfolio-rank.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank portfolios and print the top N, one per user
    Rank(RankCommand),
    /// Show how every portfolio was scored, before dedup
    Explain(ExplainCommand),
    /// Print the curation prompt for the ranked shortlist
    Prompt(PromptCommand),
    /// Map a model reply back onto ranked portfolio ids
    Resolve(ResolveCommand),
}

#[derive(Args)]
pub struct RankCommand {
    /// Portfolio JSON array file, or `-` for stdin
    pub input: PathBuf,
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Fail when fewer portfolios survive ranking
    #[arg(long)]
    pub min_candidates: Option<usize>,
}

#[derive(Args)]
pub struct ExplainCommand {
    pub input: PathBuf,
    /// Only explain this portfolio id
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct PromptCommand {
    pub input: PathBuf,
    #[arg(long)]
    pub top: Option<NonZeroUsize>,
    #[arg(long)]
    pub pick: Option<NonZeroUsize>,
}

#[derive(Args)]
pub struct ResolveCommand {
    pub input: PathBuf,
    /// Model reply text, or `@path` to read it from a file
    #[arg(long)]
    pub reply: String,
    #[arg(long)]
    pub top: Option<NonZeroUsize>,
    #[arg(long)]
    pub pick: Option<NonZeroUsize>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
