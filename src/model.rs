use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Section,
    Figure,
    Listing,
    Unknown,
}

impl LabelKind {
    /// Text shown in front of the sequence number.
    pub fn display_name(self) -> &'static str {
        match self {
            LabelKind::Section => "Section",
            LabelKind::Figure => "Fig.",
            LabelKind::Listing => "Listing",
            LabelKind::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignedLabel {
    pub id: String,
    pub tag: String,
    pub kind: LabelKind,
    pub number: usize,
    pub text: String,
}

/// Identifier to label text for one filter run.
///
/// Every assignment is kept in scan order; lookups resolve to the most recent
/// assignment for an id.
#[derive(Debug, Default, Clone)]
pub struct LabelMapping {
    entries: Vec<AssignedLabel>,
    by_id: HashMap<String, usize>,
}

impl LabelMapping {
    /// Records an assignment and returns the label it replaced, if any.
    pub fn insert(&mut self, label: AssignedLabel) -> Option<&AssignedLabel> {
        let index = self.entries.len();
        let previous = self.by_id.insert(label.id.clone(), index);
        self.entries.push(label);
        previous.map(|prev| &self.entries[prev])
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.by_id
            .get(id)
            .map(|&index| self.entries[index].text.as_str())
    }

    pub fn entries(&self) -> &[AssignedLabel] {
        &self.entries
    }

    /// Ids assigned more than once, in order of first appearance.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            let superseded = self.by_id.get(&entry.id) != Some(&index);
            if superseded && !duplicates.contains(&entry.id.as_str()) {
                duplicates.push(entry.id.as_str());
            }
        }
        duplicates
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub code_blocks_included: usize,
    pub elements_labeled: usize,
    pub captions_labeled: usize,
    pub references_resolved: usize,
    pub references_relocated: bool,
    pub heading_ids_hoisted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterRunManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub output_sha256: String,
    pub content_root: String,
    pub counts: FilterStats,
    pub labels: Vec<AssignedLabel>,
    pub warnings: Vec<String>,
}
