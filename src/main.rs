mod cli;

use chrono::Utc;
use clap::Parser;
use portfolio_rank::config;
use portfolio_rank::error::{RankError, Result};
use portfolio_rank::logging;
use portfolio_rank::observer::{BreakdownCollector, TracingObserver};
use portfolio_rank::ranking::{rank_payload_bytes, RankingOutcome};
use portfolio_rank::report;
use portfolio_rank::shortlist;
use portfolio_rank::types::config::RankConfig;
use portfolio_rank::types::report::RankingReport;
use std::io::Read;
use std::num::NonZeroUsize;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "portfolio-rank starting");

    let loaded = config::load_config(&cli.config_dir)?;
    if loaded.is_none() {
        tracing::info!(dir = %cli.config_dir.display(), "no portfolio-rank.toml found, using defaults");
    }
    let cfg = loaded.unwrap_or_default();

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let payload = read_input(&cmd.input)?;
            let outcome = rank(&payload, &cfg);
            let top_n = cmd.top.unwrap_or_else(|| cfg.top_n());
            let ranking_report = RankingReport::new(&payload, &outcome, top_n);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&ranking_report, output_format)?;
            println!("{rendered}");

            if let Some(min_candidates) = cmd.min_candidates {
                shortlist::ensure_min_candidates(&ranking_report.candidates, min_candidates)?;
            }
            if let Some(reason) = &outcome.rejected {
                eprintln!("warning: payload rejected: {reason}");
                return Ok(exit_code::WARNINGS);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Explain(cmd) => {
            let payload = read_input(&cmd.input)?;
            let mut tracing_observer = TracingObserver;
            let mut collector = BreakdownCollector::new(&mut tracing_observer);
            let outcome = rank_payload_bytes(
                &payload,
                &cfg.scoring,
                Utc::now().date_naive(),
                &mut collector,
            );

            let entries: Vec<_> = collector
                .entries
                .into_iter()
                .filter(|(candidate, _)| cmd.id.as_deref().map_or(true, |id| candidate.id == id))
                .collect();
            println!("{}", report::md::explain_markdown(&entries));

            if let Some(reason) = &outcome.rejected {
                eprintln!("warning: payload rejected: {reason}");
                return Ok(exit_code::WARNINGS);
            }
            if let (Some(id), true) = (&cmd.id, entries.is_empty()) {
                eprintln!("warning: no portfolio with id {id}");
                return Ok(exit_code::WARNINGS);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Prompt(cmd) => {
            let payload = read_input(&cmd.input)?;
            let outcome = rank(&payload, &cfg);
            let top_n = cmd.top.map_or_else(|| cfg.top_n(), NonZeroUsize::get);
            let mut settings = cfg.shortlist_settings();
            if let Some(pick) = cmd.pick {
                settings.pick = pick.get();
            }

            let ranked = outcome.top(top_n);
            shortlist::ensure_min_candidates(ranked, settings.min_candidates)?;
            print!("{}", shortlist::build_curation_prompt(ranked, &settings));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Resolve(cmd) => {
            let payload = read_input(&cmd.input)?;
            let reply = match cmd.reply.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(path)?,
                None => cmd.reply.clone(),
            };
            let outcome = rank(&payload, &cfg);
            let top_n = cmd.top.map_or_else(|| cfg.top_n(), NonZeroUsize::get);
            let pick = cmd
                .pick
                .map_or_else(|| cfg.shortlist_settings().pick, NonZeroUsize::get);

            let selected = shortlist::parse_selection(&reply, outcome.top(top_n), pick)?;
            for id in &selected {
                println!("{id}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn rank(payload: &[u8], cfg: &RankConfig) -> RankingOutcome {
    rank_payload_bytes(
        payload,
        &cfg.scoring,
        Utc::now().date_naive(),
        &mut TracingObserver,
    )
}

/// Raw payload bytes; decoding is left to the ranker so bad text is a
/// rejected payload rather than an I/O failure.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut payload = Vec::new();
        std::io::stdin().read_to_end(&mut payload)?;
        return Ok(payload);
    }
    if !path.exists() {
        return Err(RankError::InputNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_gate_failure() {
                exit_code::BLOCKING
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
