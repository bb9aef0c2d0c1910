//! `prioqueue` - submit a manifest of tasks to a priority queue and print
//! the order an executor would receive them in.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use prioqueue::config::Config;
use prioqueue::queue::{Entry, PriorityQueue};

#[derive(Parser)]
#[command(name = "prioqueue", version, about = "Bounded multi-level priority queue")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit every task in a manifest, then drain the queue in pop order
    Run {
        /// Path to the TOML manifest
        manifest: PathBuf,

        /// Output format for drained entries
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check a manifest and report what the queue would change or refuse
    Validate {
        /// Path to the TOML manifest
        manifest: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    match cli.command {
        Commands::Run { manifest, format } => run(&manifest, format),
        Commands::Validate { manifest } => validate(&manifest),
    }
}

/// Initialize stderr logging, filtered by `RUST_LOG` (default `info`).
fn init_logging(json: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn load_validated(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)?;
    let result = config.validate()?;
    for warning in &result.warnings {
        warn!("{warning}");
    }
    Ok(config)
}

fn run(path: &Path, format: OutputFormat) -> Result<()> {
    let config = load_validated(path)?;
    let mut queue: PriorityQueue<String> = config
        .queue
        .build()
        .context("Failed to construct queue from manifest")?;

    let mut rejected = 0usize;
    for task in config.tasks {
        let command = task.command.clone();
        if let Err(e) = queue.push(task.command, task.priority) {
            warn!(command = %command, error = %e, "task rejected");
            rejected += 1;
        }
    }

    info!(
        accepted = queue.count(),
        rejected,
        max_priority = queue.max_priority(),
        "manifest submitted"
    );

    let mut out = io::stdout().lock();
    for entry in queue.drain() {
        write_entry(&mut out, &entry, format)?;
    }
    out.flush()?;

    Ok(())
}

fn write_entry(out: &mut impl Write, entry: &Entry<String>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(
            out,
            "{:>5}  {}  {}",
            entry.priority(),
            entry.accepted_at().to_rfc3339(),
            entry.command()
        )?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(entry)?)?,
    }
    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let result = config.validate()?;

    for warning in &result.warnings {
        println!("warning: {warning}");
    }
    println!(
        "{}: ok ({} tasks, {} warnings)",
        path.display(),
        config.tasks.len(),
        result.warnings.len()
    );

    Ok(())
}
