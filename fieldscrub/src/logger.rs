//! Logger setup for the fieldscrub binary.
//!
//! `RUST_LOG` is honoured unless a level is forced from the command line.
//! Output always goes to stderr so it never mixes with sanitized data.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);

    // Tests may initialize more than once.
    let _ = builder.try_init();
}
