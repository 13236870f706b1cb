use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::prelude::*;

use meet_and_party::config::{self, Config};
use meet_and_party::gen::generate_cases;
use meet_and_party::{format_answer, parse_cases, write_cases};

// ============================
// CLI
// ============================

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Profile to use: local, large, or test
    #[arg(long, global = true, default_value = "local")]
    profile: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve every case in a case file and print one answer line per case
    Solve {
        /// Case file, stdin when omitted
        input: Option<PathBuf>,

        /// Append the elapsed time after the answers
        #[arg(long)]
        time: bool,
    },
    /// Print a random case file using the profile's generator settings
    Generate {
        #[arg(long)]
        cases: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

// ============================
// Logging
// ============================

fn init_logging() -> Result<()> {
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .context("invalid RUST_LOG filter")?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

// ============================
// Commands
// ============================

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run_solve(config: &Config, input: Option<&PathBuf>, time: bool) -> Result<()> {
    let start = Instant::now();

    let cases = parse_cases(&read_input(input)?).context("invalid case file")?;
    info!(cases = cases.len(), "parsed input");

    let results = config.solver().solve_cases(&cases, config.parallel_cases);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, result) in results.into_iter().enumerate() {
        let solution = result.with_context(|| format!("case #{} failed", i + 1))?;
        writeln!(out, "{}", format_answer(i + 1, &solution))?;
    }

    let elapsed = start.elapsed().as_secs_f64();
    info!(elapsed_secs = elapsed, "solved all cases");
    if time || config.report_time {
        writeln!(
            out,
            "Time taken {:.3} seconds. ({:.3} mins.)",
            elapsed,
            elapsed / 60.0
        )?;
    }
    out.flush()?;
    Ok(())
}

fn run_generate(config: &Config, cases: Option<usize>, seed: Option<u64>) -> Result<()> {
    let mut generator = config.generator;
    if let Some(cases) = cases {
        generator.cases = cases;
    }
    if let Some(seed) = seed {
        generator.seed = seed;
    }
    info!(?generator, "generating cases");

    let cases = generate_cases(&generator);
    io::stdout().lock().write_all(write_cases(&cases).as_bytes())?;
    Ok(())
}

// ============================
// Main
// ============================

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let config = config::load(&args.config, &args.profile)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    info!(
        profile = %args.profile,
        description = %config.description,
        strategy = ?config.strategy,
        parallel_cases = config.parallel_cases,
        parallel_axes = config.parallel_axes,
        threads = config.threads,
        "configuration"
    );

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .context("failed to build the rayon thread pool")?;
    }

    match &args.command {
        Command::Solve { input, time } => run_solve(&config, input.as_ref(), *time),
        Command::Generate { cases, seed } => run_generate(&config, *cases, *seed),
    }
}
