//! Command-line surface: argument parsing, logging setup and report rendering

pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, run};
