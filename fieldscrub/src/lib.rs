//! # fieldscrub CLI
//!
//! Command-line front end for `fieldscrub-core`.

pub mod cli;
pub mod commands;
pub mod logger;
