use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use super::render::{render_json, render_text};
use crate::harvester::{FileFilter, FormatRegistry, HarvestOptions, discover_files, harvest};
use crate::readers::DEFAULT_MAX_FILE_SIZE;

#[derive(Parser)]
#[command(name = "bookmark-harvest")]
#[command(version = "0.1.0")]
#[command(about = "Extract bookmarks from exported browser bookmark files", long_about = None)]
pub struct Cli {
    /// Log per-file progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree for bookmark exports and report what was found
    Scan {
        /// Directory to search recursively
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Only read files whose name (without extension) contains this text
        #[arg(long, default_value = "bookmarks", conflicts_with = "all_files")]
        name: String,

        /// Read every file with a supported extension, whatever its name
        #[arg(long)]
        all_files: bool,

        /// Report unreadable files and continue instead of stopping
        #[arg(long)]
        keep_going: bool,

        /// Largest file to read, in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
        max_file_size: u64,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the file extensions that can be scanned
    Formats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Scan { root, name, all_files, keep_going, max_file_size, format }) => {
            let filter = if all_files { FileFilter::All } else { FileFilter::NameContains(name) };
            let options = HarvestOptions { filter, keep_going };
            scan(&root, &options, max_file_size, format)?;
        }
        Some(Commands::Formats) => {
            show_formats()?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Install the stderr log subscriber; stdout is reserved for reports
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn scan(
    root: &Path,
    options: &HarvestOptions,
    max_file_size: u64,
    format: OutputFormat,
) -> Result<()> {
    let registry = FormatRegistry::with_max_file_size(max_file_size);
    let paths = discover_files(root)?;
    let report = harvest(&paths, &registry, options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match format {
        OutputFormat::Text => render_text(&report, &mut out),
        OutputFormat::Json => render_json(&report, &mut out),
    };
    written.context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}

fn show_formats() -> Result<()> {
    let registry = FormatRegistry::with_defaults();

    println!("Supported bookmark formats");
    println!("==========================");
    for extension in registry.registered_extensions() {
        println!(
            "{} ({} reader(s), {} parser(s))",
            extension,
            registry.readers_for(extension).len(),
            registry.parsers_for(extension).len()
        );
    }

    Ok(())
}
