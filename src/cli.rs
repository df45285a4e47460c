//! CLI arguments for resplot.
//!
//! This module defines the command-line interface structure using the clap library.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "resplot",
    about = "Render interactive HTML charts of per-process RSS and CPU usage",
    long_about = "Render interactive HTML charts of per-process RSS and CPU usage.\n\n\
                  Reads whitespace-delimited sample lines of the form\n\
                  `<pid> <rss_kb> <cpu_pct> <cmd...>` from standard input, keeps the\n\
                  samples whose command starts with one of the given patterns, and\n\
                  writes one HTML line chart per metric (rss.<ts>.html, cpu.<ts>.html).",
    version = "0.1.0"
)]
pub struct Args {
    /// Comma-separated command-name prefixes to include
    #[arg(long)]
    pub pattern: String,

    /// Directory the chart files are written into
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_required() {
        let result = Args::try_parse_from(["resplot"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_minimal_invocation() {
        let args = Args::try_parse_from(["resplot", "--pattern", "myproc"]).unwrap();
        assert_eq!(args.pattern, "myproc");
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_output_dir_override() {
        let args =
            Args::try_parse_from(["resplot", "--pattern", "a,b", "-o", "/tmp/charts"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("/tmp/charts"));
    }
}
