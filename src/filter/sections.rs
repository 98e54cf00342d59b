use regex::Captures;
use tracing::{debug, warn};

use super::{MarkupFilter, Rewrite};

const MAIN_CLOSE: &str = "</main>";

impl MarkupFilter {
    /// Moves the `<h2 id="references">…</dl>` block to the end of `<main>`.
    ///
    /// Documents without a references block are returned unchanged. A block
    /// with no `</main>` to receive it stays where it is.
    pub(super) fn move_references_to_main(
        &self,
        content: &str,
        warnings: &mut Vec<String>,
    ) -> Rewrite {
        let unchanged = || Rewrite {
            content: content.to_string(),
            count: 0,
        };

        let Some(block) = self.references_block_regex.find(content) else {
            return unchanged();
        };

        let mut remaining = String::with_capacity(content.len());
        remaining.push_str(&content[..block.start()]);
        remaining.push_str(&content[block.end()..]);

        let Some(main_close) = remaining.find(MAIN_CLOSE) else {
            warn!("references block found but document has no </main>; leaving it in place");
            warnings.push("references block found but document has no </main>".to_string());
            return unchanged();
        };

        let mut output = String::with_capacity(content.len() + 32);
        output.push_str(&remaining[..main_close]);
        output.push_str("<section>\n");
        output.push_str(block.as_str());
        output.push_str("\n</section>\n");
        output.push_str(&remaining[main_close..]);

        debug!(bytes = block.len(), "moved references block into main");
        Rewrite {
            content: output,
            count: 1,
        }
    }

    /// Moves `id` attributes from headings to the `<section>` directly wrapping them.
    pub(super) fn move_heading_ids_to_section(&self, content: &str) -> Rewrite {
        let mut count = 0usize;
        let output = self
            .section_heading_id_regex
            .replace_all(content, |captures: &Captures| {
                count += 1;
                format!("<section{}>{}{}", &captures[3], &captures[1], &captures[2])
            })
            .into_owned();

        Rewrite {
            content: output,
            count,
        }
    }
}
