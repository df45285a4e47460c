//! resplot library crate.
//!
//! Reads per-process resource-usage samples, filters them by command-name
//! prefix, aggregates them per pid, and renders interactive HTML charts.
//! The binary in `main.rs` is a thin wrapper over [`pipeline`].

pub mod aggregate;
pub mod chart;
pub mod cli;
pub mod filter;
pub mod pipeline;
pub mod sample;

// Re-export main types for convenience
pub use aggregate::{ProcessSeries, ProcessTable};
pub use chart::{build_plot, trace_label, write_chart, Metric};
pub use filter::PatternFilter;
pub use pipeline::{collect_samples, render_charts};
pub use sample::{parse_line, ParseError, Sample};
