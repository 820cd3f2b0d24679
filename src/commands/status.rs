use anyhow::Result;
use tracing::{info, warn};

use crate::cli::{StatusArgs, default_manifest_path};
use crate::model::{ConvertRunManifest, PaperRecord};
use crate::util::{read_json, read_json_lines};

pub fn run(args: StatusArgs) -> Result<()> {
    let manifest_path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| default_manifest_path(&args.output));

    info!(output = %args.output.display(), "status requested");

    if manifest_path.exists() {
        let manifest: ConvertRunManifest = read_json(&manifest_path)?;
        let counts = &manifest.counts;

        info!(
            run_id = %manifest.run_id,
            generated_at = %manifest.generated_at,
            input = %manifest.paths.input_path,
            input_sha256 = %manifest.input_sha256,
            papers_parsed = counts.papers_parsed,
            papers_written = counts.papers_written,
            duplicates_dropped = counts.duplicates_dropped,
            signatures_synthesized = counts.signatures_synthesized,
            footnotes = counts.footnotes,
            papers_without_venue = counts.papers_without_venue,
            papers_without_date = counts.papers_without_date,
            dropped_paper_ids = ?manifest.dropped_paper_ids,
            synthesized_signature_ids = ?manifest.synthesized_signature_ids,
            "loaded run manifest"
        );
    } else {
        warn!(path = %manifest_path.display(), "run manifest missing");
    }

    if args.output.exists() {
        let records: Vec<PaperRecord> = read_json_lines(&args.output)?;
        info!(
            path = %args.output.display(),
            records = records.len(),
            first_paper_id = ?records.first().map(|record| record.paper_id),
            last_paper_id = ?records.last().map(|record| record.paper_id),
            "output status"
        );
    } else {
        warn!(path = %args.output.display(), "output file missing");
    }

    Ok(())
}
