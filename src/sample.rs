//! Input-line parsing for per-process resource samples.
//!
//! Each stdin line carries one sample: `<pid> <rss_kb> <cpu_pct> <cmd...>`,
//! whitespace-delimited. Lines with fewer than 3 fields are not samples and
//! are skipped; numeric fields that fail to parse are a hard error.

use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub pid: u32,
    /// Resident memory in MB (input is KB, divided by 1024).
    pub rss_mb: f64,
    /// CPU usage percentage.
    pub cpu_pct: f64,
    /// Command line, fields 4+ rejoined with single spaces. Empty when the
    /// line had exactly 3 fields.
    pub cmd: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: invalid pid {value:?}")]
    InvalidPid { line: usize, value: String },

    #[error("line {line}: invalid rss_kb {value:?}")]
    InvalidRss { line: usize, value: String },

    #[error("line {line}: invalid cpu_pct {value:?}")]
    InvalidCpu { line: usize, value: String },
}

/// Parses one input line into a [`Sample`].
///
/// Returns `Ok(None)` for lines with fewer than 3 whitespace-separated
/// fields (blank lines included). `line_no` is 1-based and only used in
/// error messages.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Sample>, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Ok(None);
    }

    let pid: u32 = fields[0].parse().map_err(|_| ParseError::InvalidPid {
        line: line_no,
        value: fields[0].to_string(),
    })?;
    let rss_kb: u64 = fields[1].parse().map_err(|_| ParseError::InvalidRss {
        line: line_no,
        value: fields[1].to_string(),
    })?;
    let cpu_pct: f64 = fields[2].parse().map_err(|_| ParseError::InvalidCpu {
        line: line_no,
        value: fields[2].to_string(),
    })?;

    Ok(Some(Sample {
        pid,
        rss_mb: rss_kb as f64 / 1024.0,
        cpu_pct,
        cmd: fields[3..].join(" "),
    }))
}
