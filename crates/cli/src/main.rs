//! Pipeline scheduler CLI.
//!
//! This binary reads a count-prefixed `LOAD`/`STORE`/`ADD`/`SUB` program and
//! prints the number of cycles needed to retire it. It performs:
//! 1. **Configuration:** Built-in defaults, or a JSON file given with `--config`.
//! 2. **Loading:** Reads the program from `--input` or stdin; malformed lines are skipped.
//! 3. **Scheduling:** Runs the hazard-aware scheduler once.
//! 4. **Reporting:** The cycle count goes to stdout; timeline, statistics and logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pipesim_core::config::Config;
use pipesim_core::sim::{Simulator, Timeline};
use pipesim_core::stats::ScheduleStats;

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    version,
    about = "Five-stage pipeline hazard scheduler",
    long_about = "Reads N followed by N instruction lines (LOAD, STORE, ADD, SUB) and prints the \
                  total cycles needed to retire the program.\n\nExamples:\n  \
                  pipesim -i program.txt\n  pipesim --timeline --stats < program.txt\n  \
                  pipesim -c timing.json -i program.txt"
)]
struct Cli {
    /// Program file to read (stdin when omitted).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the per-stage timeline to stderr.
    #[arg(long)]
    timeline: bool,

    /// Print schedule statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Narrate hazards and stage cycles (debug logging).
    #[arg(short, long)]
    verbose: bool,
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}: {}", path.display(), e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    if cli.verbose {
        config.general.trace_schedule = true;
    }

    debug!(config = ?config, "configuration loaded");
    let mut sim = Simulator::new(config);
    let loaded = match &cli.input {
        Some(path) => match File::open(path) {
            Ok(file) => sim.load_program(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error: could not open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => sim.load_program(io::stdin().lock()),
    };
    if let Err(e) = loaded {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let mut stats = ScheduleStats::default();
    let total = sim.run(&mut stats);

    if cli.timeline {
        eprint!("{}", Timeline(sim.program()));
    }
    if cli.stats {
        eprintln!("{stats}");
    }

    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{total}").and_then(|()| stdout.flush()).is_err() {
        process::exit(1);
    }
}
