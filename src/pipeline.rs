//! End-to-end pipeline: read samples, filter, aggregate, render charts.

use anyhow::{Context, Result};
use chrono::Utc;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::aggregate::ProcessTable;
use crate::chart::{write_chart, Metric};
use crate::filter::PatternFilter;
use crate::sample::parse_line;

/// Reads sample lines to EOF, keeping those whose command matches the
/// filter. Short lines are skipped; read errors and numeric parse failures
/// abort the run.
pub fn collect_samples<R: BufRead>(reader: R, filter: &PatternFilter) -> Result<ProcessTable> {
    let mut table = ProcessTable::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read input line {}", line_no))?;
        let sample = match parse_line(&line, line_no)? {
            Some(s) => s,
            None => {
                debug!(line_no, "skipping short line");
                continue;
            }
        };
        if !filter.matches(&sample.cmd) {
            debug!(line_no, pid = sample.pid, cmd = %sample.cmd, "filtered out");
            continue;
        }
        table.record(sample);
    }
    debug!(processes = table.len(), "aggregation complete");
    Ok(table)
}

/// Writes one chart file per metric into `out_dir` and returns the paths.
/// Both files share a single timestamp taken when rendering starts.
pub fn render_charts(table: &ProcessTable, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;
    let timestamp = Utc::now().timestamp();
    let mut paths = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let path = write_chart(table, metric, out_dir, timestamp);
        info!(path = %path.display(), "wrote chart");
        paths.push(path);
    }
    Ok(paths)
}
