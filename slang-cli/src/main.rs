//! SLANG CLI: run counter-machine programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input error (unreadable source, bad arguments)
//! - 2: Invalid instruction reached
//! - 3: Step budget exhausted

mod commands;

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use tracing::Level;

pub(crate) const EXIT_INPUT: i32 = 1;
pub(crate) const EXIT_INVALID: i32 = 2;
pub(crate) const EXIT_STEP_LIMIT: i32 = 3;

#[derive(Parser, Debug)]
#[command(name = "slang", version, about = "Run SLANG counter-machine programs")]
pub(crate) struct Cli {
    /// Initial values for X1, X2, ... in order
    #[arg(value_name = "X1, X2, ...")]
    pub inputs: Vec<u64>,

    /// Input source file (default stdin)
    #[arg(long, value_name = "PATH", default_value = "-")]
    pub src: String,

    /// Max steps before stopping execution (0 runs forever)
    #[arg(long, value_name = "N", env = "SLANG_MAX_STEPS", default_value_t = 0)]
    pub max_steps: u64,

    /// Print the canonical listing of the program instead of running it
    #[arg(long)]
    pub listing: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(EXIT_INPUT);
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);

    if let Err(code) = commands::run(&cli) {
        process::exit(code);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .compact()
        .init();
}
