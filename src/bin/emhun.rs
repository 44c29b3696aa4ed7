//! `emhun`: the command-line front end for high-utility itemset mining
//! over mixed-sign transaction utilities.

use clap::Parser;
use emhun::config::CliConfig;
use emhun::sct::read_transactions;
use emhun::sink::{CsvSink, ResultSink, StdoutSink};
use emhun::{Database, Miner};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "emhun", about = "Mine high-utility itemsets from a mixed-sign transaction database")]
struct Args {
    /// Path to an SCT-format transaction file.
    input: PathBuf,

    /// Minimum utility threshold an itemset must reach to be reported.
    #[arg(long)]
    min_util: Option<f64>,

    /// Optional TOML config file layered under CLI flags and over defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write results as CSV to this path instead of printing a table to stdout.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Relax the SearchN descent gate from `u(β) > minUtil` to `u(β) >= minUtil`.
    #[arg(long)]
    relax_emit_gate: bool,

    /// Fork the top-level Search pivots across a thread pool. Requires
    /// the crate to be built with the `parallel` feature.
    #[arg(long)]
    parallel: bool,
}

fn run() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let mut config = CliConfig::load(args.config.as_deref())?;
    if let Some(min_util) = args.min_util {
        config.min_util = min_util;
    }
    if args.relax_emit_gate {
        config.emit_positive_bound_strict = false;
    }
    if args.parallel {
        config.parallel = true;
    }

    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let file = File::open(&args.input)?;
    let rows = read_transactions(BufReader::new(file))?;
    tracing::info!(rows = rows.len(), path = %args.input.display(), "loaded transaction file");

    let db = Database::from_rows(rows)?;
    let mining_config = config.to_mining_config();
    let itemsets = Miner::new().run(&db, &mining_config)?;
    tracing::info!(found = itemsets.len(), min_util = mining_config.min_util, "mining complete");

    match args.csv {
        Some(path) => {
            let file = File::create(&path)?;
            CsvSink::new(file).write(&itemsets)?;
        }
        None => {
            StdoutSink::new().write(&itemsets)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("emhun: {err}");
            ExitCode::FAILURE
        }
    }
}
