use std::collections::HashMap;

use tracing::{debug, warn};

use super::MarkupFilter;
use crate::model::{AssignedLabel, LabelKind, LabelMapping};

impl MarkupFilter {
    /// Numbers every element carrying an `id` attribute, per kind, in document order.
    pub(super) fn create_labels(&self, content: &str) -> LabelMapping {
        let mut counts: HashMap<LabelKind, usize> = HashMap::new();
        let mut labels = LabelMapping::default();

        for captures in self.labeled_element_regex.captures_iter(content) {
            let tag = captures[1].to_lowercase();
            let attribute_list = &captures[2];
            let id = &captures[3];

            let kind = self.label_kind_for(&tag, attribute_list);
            let number = counts.entry(kind).or_insert(0);
            *number += 1;

            let label = AssignedLabel {
                id: id.to_string(),
                text: format!("{} {}", kind.display_name(), number),
                tag,
                kind,
                number: *number,
            };
            debug!(id = %label.id, label = %label.text, "assigned label");

            if let Some(previous) = labels.insert(label) {
                warn!(id = %id, replaced = %previous.text, "duplicate element id");
            }
        }

        labels
    }

    pub(super) fn label_kind_for(&self, tag: &str, attribute_list: &str) -> LabelKind {
        match tag {
            "h2" => LabelKind::Section,
            "figure" => match self.parse_attributes(attribute_list).get("class") {
                Some(class) if class == "listing" => LabelKind::Listing,
                _ => LabelKind::Figure,
            },
            _ => LabelKind::Unknown,
        }
    }

    /// Lower-cased attribute name to value for `name="value"` pairs.
    pub(super) fn parse_attributes(&self, attribute_list: &str) -> HashMap<String, String> {
        self.attribute_regex
            .captures_iter(attribute_list)
            .map(|captures| (captures[1].to_lowercase(), captures[2].to_string()))
            .collect()
    }
}
