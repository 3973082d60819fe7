//! # digit-shift-demo
//!
//! Runs the built-in sorting scenarios, or sorts the values given on the command line.
//!
//! ```text
//! digit-shift-demo
//! digit-shift-demo --strategy counting --large-size 100000
//! digit-shift-demo -- 170 45 75 90 802 24 2 66
//! ```
//!
//! `-v` may be repeated to raise log verbosity; `RUST_LOG` takes precedence when set.

use clap::{ArgAction, Parser, ValueEnum};
use digit_shift_sort::demo::{run_demo, run_values, DemoConfig};
use digit_shift_sort::tuner::Tuner;
use digit_shift_sort::tuners::{CountingTuner, StandardTuner, ThroughputTuner};
use log::{debug, LevelFilter};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// In-place shift-insertion for every digit pass
    Shift,
    /// Counting sort for every digit pass
    Counting,
    /// Shift-insertion for small inputs, counting otherwise
    Auto,
}

#[derive(Debug, Parser)]
#[command(name = "digit-shift-demo", version, about)]
struct Cli {
    /// Values to sort instead of running the built-in scenarios
    #[arg(allow_negative_numbers = true)]
    values: Vec<i128>,

    /// Length of the reverse-ordered scenario
    #[arg(long, default_value_t = 1_000)]
    large_size: u64,

    #[arg(long, value_enum, default_value_t = Strategy::Shift)]
    strategy: Strategy,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> digit_shift_sort::Result<()> {
    let throughput = ThroughputTuner::default();
    let tuner: &dyn Tuner = match cli.strategy {
        Strategy::Shift => &StandardTuner,
        Strategy::Counting => &CountingTuner,
        Strategy::Auto => &throughput,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.values.is_empty() {
        let config = DemoConfig {
            large_size: cli.large_size,
            tuner,
        };
        run_demo(&mut out, &config)?;
    } else {
        run_values(&mut out, &cli.values, tuner)?;
    }

    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
