//! Single-line recognition.
//!
//! A [`LineClassifier`] holds the enabled [`LinePattern`]s in priority order
//! and returns the record produced by the first one whose regex matches.

mod patterns;

use serde::{Deserialize, Serialize};
use tracing::trace;
use triage_model::TestRecord;

pub use patterns::{LinePattern, PATTERNS};

/// How names captured by the numbered diagnostic pattern are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticNames {
    /// Keep the identifier as written (`WATCHDOG_RESET`).
    #[default]
    Verbatim,
    /// Replace underscores with spaces (`WATCHDOG RESET`).
    Spaced,
}

/// Classifier configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    /// Enable the `KEY: VALUE` pattern.
    pub permissive: bool,
    pub diagnostic_names: DiagnosticNames,
}

/// Tries each enabled pattern in order; first match wins.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    options: ClassifierOptions,
    patterns: Vec<&'static LinePattern>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(ClassifierOptions::default())
    }
}

impl LineClassifier {
    pub fn new(options: ClassifierOptions) -> Self {
        let patterns = PATTERNS
            .iter()
            .filter(|pattern| options.permissive || !pattern.permissive_only())
            .collect();
        Self { options, patterns }
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Names of the enabled patterns, highest priority first.
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|pattern| pattern.name()).collect()
    }

    /// Classify one line. Blank lines never match.
    pub fn classify(&self, line: &str) -> Option<TestRecord> {
        self.classify_with_pattern(line).map(|(_, record)| record)
    }

    /// Classify one line, also returning the name of the pattern that fired.
    pub fn classify_with_pattern(&self, line: &str) -> Option<(&'static str, TestRecord)> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let matched = first_match(&self.patterns, |pattern| {
            pattern
                .apply(line, &self.options)
                .map(|record| (pattern.name(), record))
        });
        if let Some((pattern, record)) = &matched {
            trace!(pattern, name = %record.name, result = %record.result, "line matched");
        }
        matched
    }
}

/// Evaluate `attempt` over `candidates` in order and return the first hit.
pub fn first_match<T, R>(
    candidates: impl IntoIterator<Item = T>,
    attempt: impl FnMut(T) -> Option<R>,
) -> Option<R> {
    candidates.into_iter().find_map(attempt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_model::TestResult;

    #[test]
    fn strict_mode_excludes_key_value() {
        let classifier = LineClassifier::default();
        assert_eq!(
            classifier.pattern_names(),
            vec![
                "arrow_triple",
                "arrow_pair",
                "diagnostic",
                "assertion",
                "trailing_verdict"
            ]
        );
        assert!(classifier.classify("Firmware Version: 2.3.1").is_none());
    }

    #[test]
    fn permissive_mode_appends_key_value_last() {
        let classifier = LineClassifier::new(ClassifierOptions {
            permissive: true,
            ..ClassifierOptions::default()
        });
        assert_eq!(classifier.pattern_names().last(), Some(&"key_value"));
        let (pattern, record) = classifier
            .classify_with_pattern("Firmware Version: 2.3.1")
            .unwrap();
        assert_eq!(pattern, "key_value");
        assert_eq!(record.result, TestResult::Info);
    }

    #[test]
    fn arrow_triple_outranks_arrow_pair() {
        let classifier = LineClassifier::default();
        let (pattern, record) = classifier
            .classify_with_pattern("Over-voltage Test --> Passed --> 58.2V")
            .unwrap();
        assert_eq!(pattern, "arrow_triple");
        assert_eq!(record.actual_value.as_deref(), Some("58.2V"));
    }

    #[test]
    fn arrow_pair_outranks_assertion() {
        let classifier = LineClassifier::default();
        let (pattern, record) = classifier
            .classify_with_pattern("Pairing --> link is failed")
            .unwrap();
        assert_eq!(pattern, "arrow_pair");
        assert_eq!(record.name, "Pairing");
        assert_eq!(record.result, TestResult::Fail);
    }

    #[test]
    fn assertion_outranks_trailing_verdict() {
        let classifier = LineClassifier::default();
        let (pattern, record) = classifier
            .classify_with_pattern("Bluetooth Pairing is passed")
            .unwrap();
        assert_eq!(pattern, "assertion");
        assert_eq!(record.name, "Bluetooth Pairing");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let classifier = LineClassifier::default();
        let record = classifier.classify("   GPS Lock Acquisition Failed \t").unwrap();
        assert_eq!(record.name, "GPS Lock Acquisition");
        assert!(classifier.classify("   ").is_none());
        assert!(classifier.classify("Report generated on 2024-01-01").is_none());
    }

    #[test]
    fn first_match_stops_at_first_hit() {
        let mut seen = Vec::new();
        let hit = first_match([1, 2, 3, 4], |n| {
            seen.push(n);
            (n % 2 == 0).then_some(n * 10)
        });
        assert_eq!(hit, Some(20));
        assert_eq!(seen, vec![1, 2]);
    }
}
