use regex::Captures;

use super::{MarkupFilter, Rewrite};
use crate::model::LabelMapping;
use crate::util::escape_html;

impl MarkupFilter {
    /// Prefixes each labeled figure caption with `<span class="label">…:</span>`.
    pub(super) fn add_labels_to_figures(&self, content: &str, labels: &LabelMapping) -> Rewrite {
        let mut count = 0usize;
        let output = self
            .figure_caption_regex
            .replace_all(content, |captures: &Captures| match labels.get(&captures[1]) {
                Some(label) => {
                    count += 1;
                    format!(
                        r#"{}<span class="label">{}:</span> "#,
                        &captures[0],
                        escape_html(label)
                    )
                }
                None => captures[0].to_string(),
            })
            .into_owned();

        Rewrite {
            content: output,
            count,
        }
    }
}
