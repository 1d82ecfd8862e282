//! pickset CLI
//!
//! Command-line front end for the selection, calendar and paging engines.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

mod commands;
mod env;
mod error;

use error::Result;

#[derive(Debug, Parser)]
#[command(name = "pickset")]
#[command(about = "pickset - headless selection, calendar and paging engines", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a month grid
    Month(commands::month::MonthArgs),
    /// Print every day between two dates
    Range(commands::range::RangeArgs),
    /// Shift a date by days, months or years
    Shift(commands::shift::ShiftArgs),
    /// Summarize pagination over a record count
    Pages(commands::pages::PagesArgs),
    /// Run a scripted selection session over a key list
    Select(commands::select::SelectArgs),
}

fn main() {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let defaults = env::Defaults::from_env();
    log::debug!("environment defaults: {:?}", defaults);

    let result = match cli.command {
        Commands::Month(args) => commands::month::execute(args, &defaults),
        Commands::Range(args) => commands::range::execute(args),
        Commands::Shift(args) => commands::shift::execute(args),
        Commands::Pages(args) => commands::pages::execute(args),
        Commands::Select(args) => commands::select::execute(args),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the logger: `-v` flags win over `PICKSET_LOG`, default is warnings.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => env::log_level().unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }
    Ok(())
}
