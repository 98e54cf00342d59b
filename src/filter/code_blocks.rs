use anyhow::{Context, Result, bail};
use tracing::debug;

use super::{MarkupFilter, Rewrite};
use crate::content::ContentLookup;
use crate::util::escape_html;

impl MarkupFilter {
    /// Replaces ````/path```` placeholders with the escaped item content.
    pub(super) fn include_code_blocks(
        &self,
        content: &str,
        lookup: &dyn ContentLookup,
    ) -> Result<Rewrite> {
        let mut output = String::with_capacity(content.len());
        let mut last_end = 0usize;
        let mut count = 0usize;

        for captures in self.code_block_regex.captures_iter(content) {
            let (Some(placeholder), Some(path)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let path = path.as_str();

            let raw = lookup
                .raw_content(path)
                .with_context(|| format!("failed to load code block {path}"))?;
            let Some(raw) = raw else {
                bail!("code block {path} not found");
            };

            output.push_str(&content[last_end..placeholder.start()]);
            output.push_str("<pre><code>");
            output.push_str(&escape_html(&raw));
            output.push_str("</code></pre>");
            last_end = placeholder.end();
            count += 1;

            debug!(path = %path, bytes = raw.len(), "included code block");
        }

        output.push_str(&content[last_end..]);
        Ok(Rewrite {
            content: output,
            count,
        })
    }
}
