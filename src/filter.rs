//! Line-level matching of console calls.
//!
//! Matching is a plain substring test for `console.<method>(`. It is not
//! syntax-aware: occurrences inside comments and string literals match, calls
//! split across lines or written as `console["log"](` do not.

use crate::methods::MethodSet;

/// Result of filtering a whole text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub text: String,
    /// Non-empty lines that were blanked
    pub removed: usize,
}

/// Decides which lines to blank for a given method set
#[derive(Debug, Clone)]
pub struct LineFilter {
    needles: Vec<String>,
}

impl LineFilter {
    pub fn new(methods: &MethodSet) -> Self {
        let needles = methods
            .iter()
            .map(|method| format!("console.{}(", method))
            .collect();
        LineFilter { needles }
    }

    /// True when the line contains a call to any selected method
    pub fn matches(&self, line: &str) -> bool {
        self.needles.iter().any(|needle| line.contains(needle.as_str()))
    }

    /// Blank every matching line. Splits on `\n` only, so the line count and
    /// any `\r` on untouched lines survive the round trip.
    pub fn apply(&self, text: &str) -> Filtered {
        let mut removed = 0;
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| {
                if self.matches(line) {
                    removed += 1;
                    ""
                } else {
                    line
                }
            })
            .collect();

        Filtered {
            text: lines.join("\n"),
            removed,
        }
    }
}
