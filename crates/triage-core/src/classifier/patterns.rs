//! Line recognizers in priority order.
//!
//! Every regex is anchored at both ends so a delimiter that merely appears
//! somewhere inside free text never produces a record.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use triage_model::{TestRecord, TestResult};

use super::{ClassifierOptions, DiagnosticNames};

/// `NAME --> RESULT --> VALUE` with an explicit result keyword.
static ARROW_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)\s*-->\s*(passed|failed|success)\s*-->\s*(.+)$")
        .expect("Invalid arrow triple regex")
});

/// `NAME --> VALUE`.
static ARROW_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*-->\s*(.+)$").expect("Invalid arrow pair regex"));

/// `12: WATCHDOG_RESET: "PASS"`. Case-sensitive.
static DIAGNOSTIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\d+:\s*([A-Z_]+):\s*"([A-Z]+)"$"#).expect("Invalid diagnostic regex")
});

/// `NAME is success|failure|passed|failed`.
static ASSERTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)\s+is\s+(success|failure|passed|failed)$")
        .expect("Invalid assertion regex")
});

/// `NAME Passed|Failed`. The name may not contain a colon.
static TRAILING_VERDICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([^:]+?)\s+(passed|failed)$").expect("Invalid trailing verdict regex")
});

/// `KEY: VALUE`.
static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+?)\s*:\s*(.+)$").expect("Invalid key/value regex"));

type Extractor = fn(&Captures<'_>, &ClassifierOptions) -> TestRecord;

/// A recognition rule: anchored regex plus the extractor run on its captures.
pub struct LinePattern {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
    extract: Extractor,
    permissive_only: bool,
}

impl LinePattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Only enabled when the classifier runs in permissive mode.
    pub fn permissive_only(&self) -> bool {
        self.permissive_only
    }

    /// Try this pattern alone against a trimmed line.
    pub fn apply(&self, line: &str, options: &ClassifierOptions) -> Option<TestRecord> {
        let captures = self.regex.captures(line)?;
        Some((self.extract)(&captures, options))
    }
}

impl std::fmt::Debug for LinePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinePattern")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .field("permissive_only", &self.permissive_only)
            .finish()
    }
}

/// Every pattern, highest priority first.
pub static PATTERNS: [LinePattern; 6] = [
    LinePattern {
        name: "arrow_triple",
        regex: &ARROW_TRIPLE,
        extract: extract_arrow_triple,
        permissive_only: false,
    },
    LinePattern {
        name: "arrow_pair",
        regex: &ARROW_PAIR,
        extract: extract_arrow_pair,
        permissive_only: false,
    },
    LinePattern {
        name: "diagnostic",
        regex: &DIAGNOSTIC,
        extract: extract_diagnostic,
        permissive_only: false,
    },
    LinePattern {
        name: "assertion",
        regex: &ASSERTION,
        extract: extract_assertion,
        permissive_only: false,
    },
    LinePattern {
        name: "trailing_verdict",
        regex: &TRAILING_VERDICT,
        extract: extract_trailing_verdict,
        permissive_only: false,
    },
    LinePattern {
        name: "key_value",
        regex: &KEY_VALUE,
        extract: extract_key_value,
        permissive_only: true,
    },
];

fn group<'h>(captures: &Captures<'h>, index: usize) -> &'h str {
    captures.get(index).map_or("", |m| m.as_str())
}

/// Trim whitespace, leading list bullets and trailing delimiters from a captured name.
pub(crate) fn clean_name(raw: &str) -> String {
    let mut name = raw.trim();
    for bullet in ["- ", "* ", "\u{2022} "] {
        if let Some(rest) = name.strip_prefix(bullet) {
            name = rest.trim_start();
            break;
        }
    }
    name.trim_end_matches([':', '-', '|', '=', '>'])
        .trim_end()
        .to_string()
}

fn extract_arrow_triple(captures: &Captures<'_>, _options: &ClassifierOptions) -> TestRecord {
    let token = group(captures, 2).to_lowercase();
    let result = if token == "passed" || token == "success" {
        TestResult::Pass
    } else {
        TestResult::Fail
    };
    TestRecord::new(clean_name(group(captures, 1)), result)
        .with_actual_value(group(captures, 3))
}

fn extract_arrow_pair(captures: &Captures<'_>, _options: &ClassifierOptions) -> TestRecord {
    let value = group(captures, 2).trim();
    let lowered = value.to_lowercase();
    let result = if lowered.contains("passed") || lowered.contains("success") {
        TestResult::Pass
    } else if lowered.contains("failed") {
        TestResult::Fail
    } else {
        TestResult::Info
    };
    TestRecord::new(clean_name(group(captures, 1)), result).with_actual_value(value)
}

fn extract_diagnostic(captures: &Captures<'_>, options: &ClassifierOptions) -> TestRecord {
    let raw_name = group(captures, 1);
    let name = match options.diagnostic_names {
        DiagnosticNames::Verbatim => raw_name.to_string(),
        DiagnosticNames::Spaced => raw_name.replace('_', " ").trim().to_string(),
    };
    let result = match group(captures, 2) {
        "PASS" => TestResult::Pass,
        "FAIL" => TestResult::Fail,
        _ => TestResult::Unknown,
    };
    TestRecord::new(name, result)
}

fn extract_assertion(captures: &Captures<'_>, _options: &ClassifierOptions) -> TestRecord {
    let token = group(captures, 2).to_lowercase();
    let result = if token == "success" || token == "passed" {
        TestResult::Pass
    } else {
        TestResult::Fail
    };
    TestRecord::new(clean_name(group(captures, 1)), result)
}

fn extract_trailing_verdict(captures: &Captures<'_>, _options: &ClassifierOptions) -> TestRecord {
    let result = if group(captures, 2).eq_ignore_ascii_case("passed") {
        TestResult::Pass
    } else {
        TestResult::Fail
    };
    TestRecord::new(clean_name(group(captures, 1)), result)
}

fn extract_key_value(captures: &Captures<'_>, _options: &ClassifierOptions) -> TestRecord {
    TestRecord::new(clean_name(group(captures, 1)), TestResult::Info)
        .with_actual_value(group(captures, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static LinePattern {
        PATTERNS.iter().find(|p| p.name() == name).unwrap()
    }

    fn apply(name: &str, line: &str) -> Option<TestRecord> {
        pattern(name).apply(line, &ClassifierOptions::default())
    }

    #[test]
    fn arrow_triple_requires_result_keyword() {
        let record = apply("arrow_triple", "Over-voltage Test --> Passed --> 58.2V").unwrap();
        assert_eq!(record.name, "Over-voltage Test");
        assert_eq!(record.result, TestResult::Pass);
        assert_eq!(record.actual_value.as_deref(), Some("58.2V"));

        let record = apply("arrow_triple", "Boot-->SUCCESS-->1.2s").unwrap();
        assert_eq!(record.result, TestResult::Pass);
        assert_eq!(record.name, "Boot");

        let record = apply("arrow_triple", "Relay --> failed --> stuck open").unwrap();
        assert_eq!(record.result, TestResult::Fail);

        assert!(apply("arrow_triple", "Relay --> Info --> stuck open").is_none());
    }

    #[test]
    fn arrow_pair_inspects_value_substrings() {
        let record = apply("arrow_pair", "SIM Detect --> Test Passed OK").unwrap();
        assert_eq!(record.result, TestResult::Pass);
        assert_eq!(record.actual_value.as_deref(), Some("Test Passed OK"));

        let record = apply("arrow_pair", "Modem --> init failed (code 7)").unwrap();
        assert_eq!(record.result, TestResult::Fail);

        let record = apply("arrow_pair", "Firmware --> v2.3.1").unwrap();
        assert_eq!(record.result, TestResult::Info);
        assert_eq!(record.actual_value.as_deref(), Some("v2.3.1"));

        // "failure" is not a failure signal for the two-part arrow form.
        let record = apply("arrow_pair", "Modem --> failure").unwrap();
        assert_eq!(record.result, TestResult::Info);
    }

    #[test]
    fn diagnostic_is_case_sensitive_and_strict() {
        let record = apply("diagnostic", "12: WATCHDOG_RESET: \"PASS\"").unwrap();
        assert_eq!(record.name, "WATCHDOG_RESET");
        assert_eq!(record.result, TestResult::Pass);

        let record = apply("diagnostic", "3: RTC_SYNC: \"SKIPPED\"").unwrap();
        assert_eq!(record.result, TestResult::Unknown);

        assert!(apply("diagnostic", "12: watchdog_reset: \"PASS\"").is_none());
        assert!(apply("diagnostic", "x: WATCHDOG: \"PASS\"").is_none());
        assert!(apply("diagnostic", "12: WATCHDOG: PASS").is_none());
    }

    #[test]
    fn diagnostic_names_can_be_spaced() {
        let options = ClassifierOptions {
            diagnostic_names: DiagnosticNames::Spaced,
            ..ClassifierOptions::default()
        };
        let record = pattern("diagnostic")
            .apply("12: WATCHDOG_RESET: \"FAIL\"", &options)
            .unwrap();
        assert_eq!(record.name, "WATCHDOG RESET");
        assert_eq!(record.result, TestResult::Fail);
    }

    #[test]
    fn assertion_accepts_four_outcomes() {
        for (line, expected) in [
            ("Bluetooth Pairing is success", TestResult::Pass),
            ("Bluetooth Pairing is PASSED", TestResult::Pass),
            ("Bluetooth Pairing is failure", TestResult::Fail),
            ("Bluetooth Pairing is Failed", TestResult::Fail),
        ] {
            let record = apply("assertion", line).unwrap();
            assert_eq!(record.name, "Bluetooth Pairing");
            assert_eq!(record.result, expected, "{line}");
        }
        assert!(apply("assertion", "Bluetooth Pairing is pending").is_none());
    }

    #[test]
    fn trailing_verdict_rejects_colon_names() {
        let record = apply("trailing_verdict", "GPS Lock Acquisition Failed").unwrap();
        assert_eq!(record.name, "GPS Lock Acquisition");
        assert_eq!(record.result, TestResult::Fail);

        let record = apply("trailing_verdict", "Braking distance passed").unwrap();
        assert_eq!(record.result, TestResult::Pass);

        assert!(apply("trailing_verdict", "Step 4: Braking Passed").is_none());
        assert!(apply("trailing_verdict", "Passed").is_none());
        assert!(apply("trailing_verdict", "Passed with remarks").is_none());
    }

    #[test]
    fn key_value_is_permissive_only() {
        let pattern = pattern("key_value");
        assert!(pattern.permissive_only());
        let record = pattern
            .apply("Firmware Version: 2.3.1", &ClassifierOptions::default())
            .unwrap();
        assert_eq!(record.name, "Firmware Version");
        assert_eq!(record.result, TestResult::Info);
        assert_eq!(record.actual_value.as_deref(), Some("2.3.1"));
    }

    #[test]
    fn names_lose_bullets_and_trailing_delimiters() {
        assert_eq!(clean_name("  - Insulation Resistance :"), "Insulation Resistance");
        assert_eq!(clean_name("-40C Cold Start"), "-40C Cold Start");
        assert_eq!(clean_name("Load | "), "Load");
        assert_eq!(clean_name(" :- "), "");
    }
}
