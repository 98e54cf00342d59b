use regex::Captures;

use super::{MarkupFilter, Rewrite};
use crate::model::LabelMapping;
use crate::util::escape_html;

impl MarkupFilter {
    /// Fills empty `<a href="#id"></a>` links with the target's label.
    ///
    /// Links that already carry text are never matched.
    pub(super) fn set_reference_labels(&self, content: &str, labels: &LabelMapping) -> Rewrite {
        let mut count = 0usize;
        let output = self
            .empty_reference_regex
            .replace_all(content, |captures: &Captures| match labels.get(&captures[2]) {
                Some(label) => {
                    count += 1;
                    format!("{}{}{}", &captures[1], escape_html(label), &captures[3])
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
