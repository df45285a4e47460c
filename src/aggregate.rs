//! Per-process sample aggregation.
//!
//! Maintains the pid → [`ProcessSeries`] mapping, appending each filtered
//! sample's memory and CPU values in arrival order. Series are created on
//! first sight of a pid and never removed.

use ahash::AHashMap as HashMap;

use crate::sample::Sample;

/// Ordered value series for one process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessSeries {
    /// Command string captured from the first sample for this pid.
    pub cmd: String,
    /// Resident memory per sample, in MB.
    pub rss: Vec<f64>,
    /// CPU percentage per sample.
    pub cpu: Vec<f64>,
}

/// pid-keyed table of process series.
///
/// Iteration yields processes in first-seen order so chart traces come out
/// deterministic run-to-run.
#[derive(Debug, Default)]
pub struct ProcessTable {
    series: HashMap<u32, ProcessSeries>,
    order: Vec<u32>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sample to its pid's series, creating the series (and
    /// capturing the command string) on first sight.
    pub fn record(&mut self, sample: Sample) {
        let entry = self.series.entry(sample.pid).or_insert_with(|| {
            self.order.push(sample.pid);
            ProcessSeries {
                cmd: sample.cmd,
                ..Default::default()
            }
        });
        entry.rss.push(sample.rss_mb);
        entry.cpu.push(sample.cpu_pct);
    }

    /// Iterates (pid, series) in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ProcessSeries)> {
        self.order.iter().map(|pid| (*pid, &self.series[pid]))
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessSeries> {
        self.series.get(&pid)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
