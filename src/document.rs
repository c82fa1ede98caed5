//! Typed army list document model
//!
//! The `Document` is the single persisted record: a map of named army
//! lists plus the session section tracking which list is current. Field
//! declaration order is alphabetical so serialization matches the
//! key-sorted output of earlier releases byte for byte.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::constants::defaults;

/// The single persisted record: all army lists plus session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Named army lists; names are unique and case-sensitive
    pub lists: BTreeMap<String, ArmyList>,
    /// Session section; `current_list` always names a key of `lists`
    pub session: Session,
}

/// One named roster: nationality, theater, HQ slots, and platoons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmyList {
    #[serde(default)]
    pub hq: Hq,
    /// Accumulated list cost; absent in documents from older releases
    #[serde(default)]
    pub initial_cost: u32,
    #[serde(default)]
    pub logistics_points: u32,
    pub nationality: String,
    /// Unit/platoon entries are opaque payloads owned by UI-level editors
    #[serde(default)]
    pub platoons: Vec<Value>,
    pub theater_selector: String,
}

/// HQ role slots, each empty or holding a unit reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hq {
    #[serde(default)]
    pub captain: Option<Value>,
    #[serde(default)]
    pub infantry: Option<Value>,
    #[serde(default)]
    pub major: Option<Value>,
}

/// Session section of the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub current_list: String,
}

impl ArmyList {
    /// Empty template for a freshly created list
    pub fn template(nationality: &str, theater_selector: &str) -> Self {
        Self {
            hq: Hq::default(),
            initial_cost: 0,
            logistics_points: 0,
            nationality: nationality.to_string(),
            platoons: Vec::new(),
            theater_selector: theater_selector.to_string(),
        }
    }
}

impl Document {
    /// Whether the document upholds the store invariants:
    /// non-empty `lists` and a `current_list` naming an existing key
    pub fn is_consistent(&self) -> bool {
        !self.lists.is_empty() && self.lists.contains_key(&self.session.current_list)
    }
}

impl Default for Document {
    fn default() -> Self {
        let mut lists = BTreeMap::new();
        lists.insert(
            defaults::LIST_NAME.to_string(),
            ArmyList::template(defaults::NATIONALITY, defaults::THEATER_SELECTOR),
        );
        Self {
            lists,
            session: Session {
                current_list: defaults::LIST_NAME.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_consistent() {
        let document = Document::default();
        assert_eq!(document.lists.len(), 1);
        assert_eq!(document.session.current_list, "default");
        assert!(document.is_consistent());

        let default_list = document.lists.get("default").unwrap();
        assert_eq!(default_list.nationality, "Britain");
        assert_eq!(default_list.theater_selector, "1944 - Normandy");
        assert!(default_list.platoons.is_empty());
        assert_eq!(default_list.hq, Hq::default());
    }

    #[test]
    fn test_inconsistent_when_current_list_missing() {
        let mut document = Document::default();
        document.session.current_list = "ghost".to_string();
        assert!(!document.is_consistent());

        document.session.current_list = "default".to_string();
        document.lists.clear();
        assert!(!document.is_consistent());
    }

    #[test]
    fn test_parses_documents_from_older_releases() {
        // Early releases stored lists without the cost accumulators
        let json = r#"{
            "lists": {
                "default": {
                    "hq": {"major": null, "captain": null, "infantry": null},
                    "platoons": [],
                    "nationality": "Britain",
                    "theater_selector": "1944 - Normandy"
                }
            },
            "session": {"current_list": "default"}
        }"#;

        let document: Document = serde_json::from_str(json).unwrap();
        let list = document.lists.get("default").unwrap();
        assert_eq!(list.initial_cost, 0);
        assert_eq!(list.logistics_points, 0);
        assert!(document.is_consistent());
    }
}
