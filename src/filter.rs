//! Command-name prefix filtering.
//!
//! Determines which samples are kept based on the comma-separated prefix
//! patterns supplied via `--pattern`.

/// Prefix filter built from the `--pattern` argument.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    patterns: Vec<String>,
}

impl PatternFilter {
    /// Splits the pattern spec on commas. Segments are kept verbatim: no
    /// trimming, and an empty segment (e.g. from `"a,"`) matches every
    /// command since every string starts with "".
    pub fn new(spec: &str) -> Self {
        Self {
            patterns: spec.split(',').map(str::to_string).collect(),
        }
    }

    /// True iff `cmd` starts with at least one pattern (exact,
    /// case-sensitive prefix match).
    pub fn matches(&self, cmd: &str) -> bool {
        self.patterns.iter().any(|p| cmd.starts_with(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pattern_prefix_match() {
        let filter = PatternFilter::new("myproc");
        assert!(filter.matches("myproc"));
        assert!(filter.matches("myproc arg"));
        assert!(filter.matches("myproc2"));
        assert!(!filter.matches("other"));
        assert!(!filter.matches("xmyproc"));
    }

    #[test]
    fn test_multiple_patterns() {
        let filter = PatternFilter::new("nginx,postgres");
        assert!(filter.matches("nginx: worker process"));
        assert!(filter.matches("postgres -D /data"));
        assert!(!filter.matches("mysql"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filter = PatternFilter::new("myproc");
        assert!(!filter.matches("MyProc"));
        assert!(!filter.matches("MYPROC"));
    }

    #[test]
    fn test_empty_segment_matches_everything() {
        let filter = PatternFilter::new("a,");
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_empty_cmd_only_matches_empty_pattern() {
        let filter = PatternFilter::new("myproc");
        assert!(!filter.matches(""));
    }

    #[test]
    fn test_patterns_are_not_trimmed() {
        let filter = PatternFilter::new("a, b");
        assert!(filter.matches("a1"));
        assert!(filter.matches(" b2"));
        assert!(!filter.matches("b2"));
    }
}
