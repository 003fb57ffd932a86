use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use repgraph_core::json::{
    compare_history, compare_sessions, parse_payload, ComparePayload, HistoryPayload,
};
use repgraph_core::{
    load_preferences, print_comparison_report, telemetry, ComparisonOutput, WeightUnit,
};

#[derive(Parser, Debug)]
#[command(name = "repgraph", version, about = "Compare a workout session against the previous one")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Weight unit for display; overrides the payload and the preferences file
    #[arg(long, global = true, env = "REPGRAPH_UNIT")]
    unit: Option<WeightUnit>,

    /// Preferences file (JSON)
    #[arg(long, global = true, env = "REPGRAPH_PREFS", default_value = "repgraph.json")]
    prefs: PathBuf,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Dump telemetry counters (prometheus text format) to stderr when done
    #[arg(long, global = true)]
    telemetry: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare explicit current/previous sets: { current, previous, movement }
    Compare { input: PathBuf },
    /// Group a set history by day and compare the latest two days: { history, movement }
    History { input: PathBuf },
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
}

fn emit(out: &ComparisonOutput, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(out)?);
    } else {
        let metrics: Vec<_> = out.metrics.iter().map(|v| v.metric.clone()).collect();
        print_comparison_report(&metrics, out.weight_unit);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();
    let cli = Cli::parse();

    let prefs = load_preferences(&cli.prefs)
        .with_context(|| format!("loading preferences from {}", cli.prefs.display()))?;
    debug!("preferences: {prefs:?}");

    match cli.command {
        Command::Compare { input } => {
            let mut payload: ComparePayload = parse_payload(&read(&input)?, "ComparePayload")?;
            if let Some(unit) = cli.unit {
                payload.weight_unit = Some(unit);
            }
            emit(&compare_sessions(&payload, prefs.weight_unit), cli.json)?;
        }
        Command::History { input } => {
            let mut payload: HistoryPayload = parse_payload(&read(&input)?, "HistoryPayload")?;
            if let Some(unit) = cli.unit {
                payload.weight_unit = Some(unit);
            }
            emit(&compare_history(&payload, prefs.weight_unit), cli.json)?;
        }
    }

    if cli.telemetry {
        eprint!("{}", telemetry::gather_text());
    }
    Ok(())
}
