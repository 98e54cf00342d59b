use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use markupfilter::model::FilterRunManifest;
use markupfilter::util::{now_utc_string, read_text, sha256_hex, write_json_pretty, write_text};
use markupfilter::{DirectoryContent, FilterOutput, MarkupFilter};

use crate::cli::FilterArgs;

pub fn run(args: FilterArgs) -> Result<()> {
    let input = read_text(&args.input)?;

    info!(
        input = %args.input.display(),
        content_root = %args.content_root.display(),
        "starting markup filter"
    );

    let filter = MarkupFilter::new()?;
    let lookup = DirectoryContent::new(&args.content_root);
    let output = filter
        .run(&input, &lookup)
        .with_context(|| format!("failed to filter {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            write_text(path, &output.content)?;
            info!(path = %path.display(), "wrote filtered document");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.content.as_bytes())
                .context("failed to write filtered document to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }

    if let Some(manifest_path) = &args.manifest_path {
        let manifest = build_manifest(&args, &input, &output);
        write_json_pretty(manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote filter run manifest");
    }

    Ok(())
}

fn build_manifest(args: &FilterArgs, input: &str, output: &FilterOutput) -> FilterRunManifest {
    FilterRunManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        input_path: args.input.display().to_string(),
        input_sha256: sha256_hex(input.as_bytes()),
        output_sha256: sha256_hex(output.content.as_bytes()),
        content_root: args.content_root.display().to_string(),
        counts: output.stats,
        labels: output.labels.entries().to_vec(),
        warnings: output.warnings.clone(),
    }
}
