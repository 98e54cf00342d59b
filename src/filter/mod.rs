//! Cross-reference labeling and structural touch-ups for rendered HTML pages.
//!
//! Stages run in a fixed order over one document value: code block inclusion,
//! label assignment, caption annotation, reference resolution, references
//! relocation and heading-id hoisting. Every stage takes the current document
//! and returns a new one.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info};

use crate::content::ContentLookup;
use crate::model::{FilterStats, LabelMapping};

mod captions;
mod code_blocks;
mod labels;
mod references;
mod sections;

pub struct MarkupFilter {
    code_block_regex: Regex,
    labeled_element_regex: Regex,
    attribute_regex: Regex,
    figure_caption_regex: Regex,
    empty_reference_regex: Regex,
    references_block_regex: Regex,
    section_heading_id_regex: Regex,
}

#[derive(Debug)]
pub struct FilterOutput {
    pub content: String,
    pub labels: LabelMapping,
    pub stats: FilterStats,
    pub warnings: Vec<String>,
}

/// Document produced by a single stage and the number of rewrites it made.
#[derive(Debug)]
struct Rewrite {
    content: String,
    count: usize,
}

impl MarkupFilter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            code_block_regex: Regex::new(r"````(/[^`]+)````")
                .context("failed to compile code block regex")?,
            labeled_element_regex: Regex::new(r#"<(\w+)([^>]*\s+id="([^"]+)"[^>]*)>"#)
                .context("failed to compile labeled element regex")?,
            attribute_regex: Regex::new(r#"\s*(\w+)\s*=\s*"([^"]+)"\s*"#)
                .context("failed to compile attribute regex")?,
            figure_caption_regex: Regex::new(
                r#"(?s)<figure[^>]*\s+id="([^"]+)".*?<figcaption>(?:\s*<p>)?"#,
            )
            .context("failed to compile figure caption regex")?,
            empty_reference_regex: Regex::new(r##"(<a href="#([^"]+)">)(</a>)"##)
                .context("failed to compile empty reference regex")?,
            references_block_regex: Regex::new(r#"(?s)<h2 id="references">.*?</dl>"#)
                .context("failed to compile references block regex")?,
            section_heading_id_regex: Regex::new(r"<section>(\s*)(<h\d[^>]*)(\sid=[^\s>]+)")
                .context("failed to compile section heading id regex")?,
        })
    }

    /// Runs every stage over `content`.
    ///
    /// A missing code block item aborts the run; nothing else is fatal.
    pub fn run(&self, content: &str, lookup: &dyn ContentLookup) -> Result<FilterOutput> {
        let mut stats = FilterStats::default();
        let mut warnings = Vec::new();

        let included = self.include_code_blocks(content, lookup)?;
        stats.code_blocks_included = included.count;
        debug!(count = included.count, "included code blocks");

        let labels = self.create_labels(&included.content);
        stats.elements_labeled = labels.entries().len();
        for id in labels.duplicate_ids() {
            warnings.push(format!(
                "id \"{id}\" appears more than once; the last occurrence's label is used"
            ));
        }

        let captioned = self.add_labels_to_figures(&included.content, &labels);
        stats.captions_labeled = captioned.count;

        let referenced = self.set_reference_labels(&captioned.content, &labels);
        stats.references_resolved = referenced.count;

        let relocated = self.move_references_to_main(&referenced.content, &mut warnings);
        stats.references_relocated = relocated.count > 0;

        let hoisted = self.move_heading_ids_to_section(&relocated.content);
        stats.heading_ids_hoisted = hoisted.count;

        info!(
            code_blocks = stats.code_blocks_included,
            labels = stats.elements_labeled,
            captions = stats.captions_labeled,
            references = stats.references_resolved,
            references_relocated = stats.references_relocated,
            heading_ids = stats.heading_ids_hoisted,
            "markup filter completed"
        );

        Ok(FilterOutput {
            content: hoisted.content,
            labels,
            stats,
            warnings,
        })
    }

    /// Label assignment alone, without touching the document.
    pub fn labels(&self, content: &str) -> LabelMapping {
        self.create_labels(content)
    }
}
