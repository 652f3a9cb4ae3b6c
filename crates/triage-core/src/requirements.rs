//! Requirement generation from a list of test case descriptions.

use serde::Serialize;
use tracing::debug;
use triage_model::TestCaseInfo;

use crate::links::encode_query;

pub const GENERIC_REQUIREMENT: &str = "Generic requirement: System must handle this case.";
pub const GENERIC_EQUIPMENT: &str = "Not specified.";

/// One generated requirement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Title-cased knowledge-base key, or the case text for generic rows.
    pub test_case: String,
    /// `REQ_001`, `REQ_002`, ... numbered per input case.
    pub id: String,
    pub description: String,
    pub equipment: String,
    /// Set for generic rows so the caller can offer a search link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_query: Option<String>,
}

impl Requirement {
    pub fn is_generic(&self) -> bool {
        self.research_query.is_some()
    }

    /// Web search URL for generic rows.
    pub fn research_url(&self) -> Option<String> {
        self.research_query.as_deref().map(|query| {
            format!(
                "https://www.google.com/search?q={}+test+standard",
                encode_query(query)
            )
        })
    }
}

/// Generate requirements for each non-blank case.
///
/// Every knowledge-base entry whose key (minus a trailing ` test`) occurs in
/// the lower-cased case contributes a row. Cases matching nothing get one
/// generic row. All rows for a case share its ID.
pub fn generate_requirements<S: AsRef<str>>(
    cases: &[S],
    knowledge: &[TestCaseInfo],
) -> Vec<Requirement> {
    let mut requirements = Vec::new();
    let cases = cases
        .iter()
        .map(|case| case.as_ref().trim())
        .filter(|case| !case.is_empty());
    for (idx, case) in cases.enumerate() {
        let id = format!("REQ_{:03}", idx + 1);
        let lowered = case.to_lowercase();
        let matches: Vec<_> = knowledge
            .iter()
            .filter(|info| {
                let key = info.key.strip_suffix(" test").unwrap_or(&info.key);
                !key.is_empty() && lowered.contains(key)
            })
            .map(|info| Requirement {
                test_case: title_case(&info.key),
                id: id.clone(),
                description: info.requirement.clone(),
                equipment: info.equipment.join(", "),
                research_query: None,
            })
            .collect();
        if matches.is_empty() {
            debug!(case, "no knowledge-base entry; emitting generic requirement");
            requirements.push(Requirement {
                test_case: case.to_string(),
                id,
                description: GENERIC_REQUIREMENT.to_string(),
                equipment: GENERIC_EQUIPMENT.to_string(),
                research_query: Some(case.to_string()),
            });
        } else {
            requirements.extend(matches);
        }
    }
    requirements
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(key: &str, requirement: &str, equipment: &[&str]) -> TestCaseInfo {
        TestCaseInfo {
            key: key.to_string(),
            requirement: requirement.to_string(),
            equipment: equipment.iter().map(|e| (*e).to_string()).collect(),
        }
    }

    #[test]
    fn title_case_follows_word_boundaries() {
        assert_eq!(title_case("over-voltage"), "Over-Voltage");
        assert_eq!(title_case("ip rating"), "Ip Rating");
        assert_eq!(title_case("frame FATIGUE"), "Frame Fatigue");
    }

    #[test]
    fn trailing_test_suffix_is_ignored_in_keys() {
        let kb = [info("vibration test", "Survive 5-500 Hz sweep.", &["Shaker"])];
        let reqs = generate_requirements(&["Vibration"], &kb);
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].test_case, "Vibration Test");
        assert!(!reqs[0].is_generic());
    }

    #[test]
    fn embedded_knowledge_base_yields_one_row_per_concept() {
        let kb = triage_standards::load_test_cases().unwrap();
        let reqs = generate_requirements(&["IP rating", "Vibration sweep"], &kb);
        let cases: Vec<_> = reqs.iter().map(|r| r.test_case.as_str()).collect();
        assert_eq!(cases, vec!["Ip Rating", "Vibration"]);
        let ids: Vec<_> = reqs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REQ_001", "REQ_002"]);
    }

    #[test]
    fn research_url_encodes_query() {
        let reqs = generate_requirements(&["Salt fog 96h"], &[]);
        assert_eq!(
            reqs[0].research_url().as_deref(),
            Some("https://www.google.com/search?q=Salt+fog+96h+test+standard")
        );
    }
}
