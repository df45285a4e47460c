//! resplot - version 0.1.0
//!
//! Reads per-process resource samples from stdin and writes one interactive
//! HTML chart per metric. This is the main entry point that parses the CLI,
//! initializes logging, and runs the pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{debug, info, Level};

use resplot::cli::{Args, LogLevel};
use resplot::{collect_samples, render_charts, PatternFilter};

/// Initializes tracing logging subsystem with configured log level.
fn setup_logging(args: &Args) {
    let log_level = match args.log_level {
        LogLevel::Off => Level::ERROR,
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args);

    let filter = PatternFilter::new(&args.pattern);
    debug!(pattern = %args.pattern, "pattern filter configured");

    let stdin = io::stdin();
    let table =
        collect_samples(stdin.lock(), &filter).context("failed to collect samples from stdin")?;
    debug!(?table, "aggregated process table");

    if table.is_empty() {
        info!("no samples matched the given patterns");
    }

    let paths = render_charts(&table, &args.output_dir).with_context(|| {
        format!(
            "failed to write charts into {}",
            args.output_dir.display()
        )
    })?;

    for path in &paths {
        println!("{}", path.display());
    }

    Ok(())
}
