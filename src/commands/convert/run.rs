use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::cli::{ConvertArgs, default_manifest_path};
use crate::model::{ConvertCounts, ConvertPaths, ConvertRunManifest, PaperRecord};
use crate::util::{
    now_utc_string, sha256_file, utc_compact_string, write_json_lines, write_json_pretty,
};

use super::assemble::{Paper, ParsedCorpus, parse_corpus};
use super::grammar::{CorpusGrammar, PaperPatterns};

const MANIFEST_VERSION: u32 = 1;

pub fn run(args: ConvertArgs) -> Result<()> {
    let started_ts = Utc::now();
    let run_id = format!("run-{}", utc_compact_string(started_ts));
    let manifest_path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| default_manifest_path(&args.output));

    info!(input = %args.input.display(), run_id = %run_id, "starting convert");

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mut grammar = CorpusGrammar::default();
    if args.keep_duplicate {
        grammar.duplicate_paper_id = None;
    }
    let patterns = PaperPatterns::new(grammar)?;

    let corpus = parse_corpus(&input, &patterns)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    let counts = summarize(&corpus);
    let records = corpus
        .papers
        .iter()
        .map(Paper::to_record)
        .collect::<Vec<PaperRecord>>();

    if args.dry_run {
        info!(
            papers_parsed = counts.papers_parsed,
            papers_written = counts.papers_written,
            duplicates_dropped = counts.duplicates_dropped,
            "convert dry-run complete"
        );
        return Ok(());
    }

    write_json_lines(&args.output, &records)?;
    info!(path = %args.output.display(), records = records.len(), "wrote papers");

    let manifest = ConvertRunManifest {
        manifest_version: MANIFEST_VERSION,
        run_id,
        generated_at: now_utc_string(),
        input_sha256: sha256_file(&args.input)?,
        paths: ConvertPaths {
            input_path: args.input.display().to_string(),
            output_path: args.output.display().to_string(),
            manifest_path: manifest_path.display().to_string(),
        },
        counts,
        dropped_paper_ids: corpus.dropped_paper_ids.clone(),
        synthesized_signature_ids: corpus
            .papers
            .iter()
            .filter(|paper| paper.signature_synthesized)
            .map(|paper| paper.id)
            .collect(),
    };

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote run manifest");
    info!(
        papers = manifest.counts.papers_written,
        footnotes = manifest.counts.footnotes,
        "convert completed"
    );

    Ok(())
}

pub(super) fn summarize(corpus: &ParsedCorpus) -> ConvertCounts {
    let papers = &corpus.papers;
    ConvertCounts {
        papers_parsed: corpus.parsed_count,
        papers_written: papers.len(),
        duplicates_dropped: corpus.dropped_paper_ids.len(),
        signatures_synthesized: papers
            .iter()
            .filter(|paper| paper.signature_synthesized)
            .count(),
        footnotes: papers.iter().map(|paper| paper.footnote_count).sum(),
        papers_without_venue: papers.iter().filter(|paper| paper.venue.is_none()).count(),
        papers_without_date: papers.iter().filter(|paper| paper.date.is_none()).count(),
    }
}
