//! Chart emission.
//!
//! Builds one plotly line chart per metric, one trace per process
//! (x = sample index, y = metric values), and writes it as a standalone
//! interactive HTML file named `<metric>.<unix-timestamp>.html`.

use plotly::common::Mode;
use plotly::{Plot, Scatter};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::aggregate::{ProcessSeries, ProcessTable};

/// Number of command characters carried into trace labels.
const LABEL_CMD_CHARS: usize = 16;

/// The two charted metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Rss,
    Cpu,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Rss, Metric::Cpu];

    /// Metric name as used in trace labels and output filenames.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Rss => "rss",
            Metric::Cpu => "cpu",
        }
    }

    /// Selects this metric's value series from a process.
    pub fn values(self, series: &ProcessSeries) -> &[f64] {
        match self {
            Metric::Rss => &series.rss,
            Metric::Cpu => &series.cpu,
        }
    }
}

/// Trace label: first 16 characters of the command plus the metric name.
/// Truncation is char-based so multibyte commands cannot split a code point.
pub fn trace_label(cmd: &str, metric: Metric) -> String {
    let prefix: String = cmd.chars().take(LABEL_CMD_CHARS).collect();
    format!("{} {}", prefix, metric.name())
}

/// Builds the plot for one metric: one line trace per process, in the
/// table's first-seen order.
pub fn build_plot(table: &ProcessTable, metric: Metric) -> Plot {
    let mut plot = Plot::new();
    for (pid, series) in table.iter() {
        let values = metric.values(series);
        let x: Vec<usize> = (0..values.len()).collect();
        let trace = Scatter::new(x, values.to_vec())
            .mode(Mode::Lines)
            .name(&trace_label(&series.cmd, metric));
        debug!(pid, metric = metric.name(), points = values.len(), "added trace");
        plot.add_trace(trace);
    }
    plot
}

/// Writes one metric's chart into `out_dir` as
/// `<metric>.<timestamp>.html` and returns the path. An empty table still
/// produces a (trace-less) chart file.
pub fn write_chart(
    table: &ProcessTable,
    metric: Metric,
    out_dir: &Path,
    timestamp: i64,
) -> PathBuf {
    let path = out_dir.join(format!("{}.{}.html", metric.name(), timestamp));
    build_plot(table, metric).write_html(&path);
    path
}
