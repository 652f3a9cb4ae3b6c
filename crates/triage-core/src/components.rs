//! Component knowledge-base lookup and register entries.

use serde::{Deserialize, Serialize};
use triage_model::ComponentInfo;

/// A knowledge-base hit for a user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMatch<'a> {
    /// The query as typed, upper-cased for display.
    pub part_number: String,
    pub info: &'a ComponentInfo,
}

/// Find the first entry whose part number occurs in the trimmed, lower-cased query.
pub fn lookup_component<'a>(query: &str, knowledge: &'a [ComponentInfo]) -> Option<ComponentMatch<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    knowledge
        .iter()
        .find(|info| !info.part_number.is_empty() && query.contains(info.part_number.as_str()))
        .map(|info| ComponentMatch {
            part_number: query.to_uppercase(),
            info,
        })
}

/// One row of the component register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub part_number: String,
    pub manufacturer: String,
    pub function: String,
    /// Voltage rating or other headline value.
    pub value: String,
    pub notes: String,
}

impl From<&ComponentMatch<'_>> for ComponentEntry {
    fn from(found: &ComponentMatch<'_>) -> Self {
        Self {
            part_number: found.part_number.clone(),
            manufacturer: found.info.manufacturer.clone(),
            function: found.info.function.clone(),
            value: found
                .info
                .voltage
                .clone()
                .or_else(|| found.info.current.clone())
                .unwrap_or_default(),
            notes: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> Vec<ComponentInfo> {
        vec![
            ComponentInfo {
                part_number: "irfb4110".to_string(),
                manufacturer: "Infineon".to_string(),
                function: "N-Channel MOSFET".to_string(),
                voltage: Some("100V".to_string()),
                current: Some("180A".to_string()),
            },
            ComponentInfo {
                part_number: "1n4007".to_string(),
                manufacturer: "Various".to_string(),
                function: "Rectifier Diode".to_string(),
                voltage: None,
                current: Some("1A".to_string()),
            },
        ]
    }

    #[test]
    fn query_may_contain_extra_text() {
        let kb = kb();
        let found = lookup_component("  IRFB4110PBF ", &kb).unwrap();
        assert_eq!(found.part_number, "IRFB4110PBF");
        assert_eq!(found.info.manufacturer, "Infineon");
    }

    #[test]
    fn blank_and_unknown_queries_miss() {
        let kb = kb();
        assert!(lookup_component("   ", &kb).is_none());
        assert!(lookup_component("LM317", &kb).is_none());
    }

    #[test]
    fn entry_value_falls_back_to_current() {
        let kb = kb();
        let found = lookup_component("1N4007", &kb).unwrap();
        let entry = ComponentEntry::from(&found);
        assert_eq!(entry.value, "1A");
        assert_eq!(entry.function, "Rectifier Diode");
    }
}
