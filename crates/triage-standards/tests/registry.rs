use std::fs;

use triage_standards::{StandardLookup, StandardsError, StandardsRegistry};

#[test]
fn embedded_registry_is_complete() {
    let registry = StandardsRegistry::load_embedded().expect("load embedded tables");
    assert_eq!(registry.keywords.len(), 32);
    assert_eq!(registry.test_cases.len(), 6);
    assert_eq!(registry.components.len(), 3);
}

#[test]
fn embedded_keywords_resolve_known_phrases() {
    let registry = StandardsRegistry::load_embedded().expect("load embedded tables");
    let lookup = StandardLookup::new(registry.keywords);

    assert_eq!(
        lookup.lookup("GPS Lock Acquisition"),
        Some("NMEA 0183 / GNSS Performance Standards")
    );
    assert_eq!(
        lookup.lookup("WATCHDOG_RESET"),
        Some("System Watchdog Functionality Spec")
    );
    assert_eq!(lookup.lookup("Enclosure IP Rating check"), Some("IEC 60529"));
    assert_eq!(lookup.lookup("Over-voltage Test"), None);
}

#[test]
fn override_directory_replaces_only_present_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("keyword_standards.csv"),
        "Keyword,Standard\nlead,RoHS 2011/65/EU\n",
    )
    .expect("write override");

    let registry = StandardsRegistry::load_from_dir(dir.path()).expect("load override");
    assert_eq!(registry.keywords.len(), 1);
    assert_eq!(registry.keywords.entries()[0].standard, "RoHS 2011/65/EU");
    assert_eq!(registry.test_cases.len(), 6);
}

#[test]
fn missing_override_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope");
    let err = StandardsRegistry::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, StandardsError::DirectoryNotFound { .. }));
}

#[test]
fn malformed_override_reports_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("components.csv"), "Part Number\nx,y,z\n").expect("write");
    let err = StandardsRegistry::load_from_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("components.csv"), "{err}");
}
