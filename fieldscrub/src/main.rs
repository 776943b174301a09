// fieldscrub/src/main.rs
//! fieldscrub entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use fieldscrub::cli::{Cli, Commands};
use fieldscrub::commands::{list, record, text};
use fieldscrub::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match args.command {
        Commands::Text(cmd) => text::run_text(&cmd),
        Commands::Record(cmd) => record::run_record(&cmd),
        Commands::List => list::run_list(&mut std::io::stdout()),
    }
}
