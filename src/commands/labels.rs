use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use markupfilter::util::read_text;
use markupfilter::{LabelMapping, MarkupFilter};

use crate::cli::LabelsArgs;

pub fn run(args: LabelsArgs) -> Result<()> {
    let input = read_text(&args.input)?;
    let labels = MarkupFilter::new()?.labels(&input);

    if args.json {
        let rendered = render_labels_json(&labels)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{rendered}").context("failed to write labels to stdout")?;
        return Ok(());
    }

    for entry in labels.entries() {
        info!(id = %entry.id, tag = %entry.tag, label = %entry.text, "label");
    }
    info!(
        input = %args.input.display(),
        labels = labels.len(),
        duplicates = labels.duplicate_ids().len(),
        "label scan complete"
    );

    Ok(())
}

fn render_labels_json(labels: &LabelMapping) -> Result<String> {
    serde_json::to_string_pretty(labels.entries()).context("failed to serialize labels")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_labels_json_lists_assignments_in_document_order() {
        let labels = MarkupFilter::new()
            .expect("patterns should compile")
            .labels(r#"<h2 id="a">A</h2><figure id="b"></figure>"#);

        let rendered = render_labels_json(&labels).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        assert_eq!(value[0]["text"], "Section 1");
        assert_eq!(value[0]["kind"], "section");
        assert_eq!(value[1]["text"], "Fig. 1");
        assert_eq!(value[1]["tag"], "figure");
        assert_eq!(value[1]["number"], 1);
    }
}
