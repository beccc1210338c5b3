//! Checklist reference data and check/uncheck bookkeeping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skylane_config::{ChecklistConfig, ConfigError, parse_checklists_yaml};

const BUILTIN_CATALOG: &str = include_str!("../../../configs/checklists/preflight.yaml");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistSection {
    pub id: String,
    pub title: String,
    pub notes: Vec<String>,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checklist {
    pub id: String,
    pub title: String,
    pub sections: Vec<ChecklistSection>,
    pub source_notes: Vec<String>,
}

impl Checklist {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn section(&self, id: &str) -> Option<&ChecklistSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

impl From<ChecklistConfig> for Checklist {
    fn from(config: ChecklistConfig) -> Self {
        Self {
            id: config.id,
            title: config.title,
            source_notes: config.source_notes,
            sections: config
                .sections
                .into_iter()
                .map(|section| ChecklistSection {
                    id: section.id,
                    title: section.title,
                    notes: section.notes,
                    items: section
                        .items
                        .into_iter()
                        .map(|item| ChecklistItem {
                            id: item.id,
                            label: item.label,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Checklists shipped with the binary.
pub fn builtin() -> Result<Vec<Checklist>, ConfigError> {
    Ok(parse_checklists_yaml(BUILTIN_CATALOG)?
        .into_iter()
        .map(Checklist::from)
        .collect())
}

/// Which items are checked. Stored as `{ "itemId": true }`, the same shape
/// the web dashboard persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    checked: BTreeMap<String, bool>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, item_id: &str, checked: bool) {
        self.checked.insert(item_id.to_string(), checked);
    }

    pub fn check(&mut self, item_id: &str) {
        self.set(item_id, true);
    }

    pub fn uncheck(&mut self, item_id: &str) {
        self.set(item_id, false);
    }

    /// Flip an item and return its new state.
    pub fn toggle(&mut self, item_id: &str) -> bool {
        let now = !self.is_checked(item_id);
        self.set(item_id, now);
        now
    }

    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checked.get(item_id).copied().unwrap_or(false)
    }

    /// Forget every item of one section.
    pub fn reset_section(&mut self, section: &ChecklistSection) {
        for item in &section.items {
            self.checked.remove(&item.id);
        }
    }

    pub fn reset_all(&mut self) {
        self.checked.clear();
    }

    pub fn checked_count(&self, checklist: &Checklist) -> usize {
        checklist
            .items()
            .filter(|item| self.is_checked(&item.id))
            .count()
    }

    /// Percentage of the checklist's items that are checked. Entries for other
    /// checklists are ignored; an empty checklist is 0%.
    pub fn progress(&self, checklist: &Checklist) -> f64 {
        let total = checklist.item_count();
        if total == 0 {
            return 0.0;
        }
        self.checked_count(checklist) as f64 / total as f64 * 100.0
    }

    pub fn is_complete(&self, checklist: &Checklist) -> bool {
        checklist.item_count() > 0 && self.checked_count(checklist) == checklist.item_count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a saved state. Unreadable data starts a fresh checklist.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            log::warn!("discarding unreadable checklist state: {err}");
            Self::default()
        })
    }
}
