use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::cli::ValidateArgs;
use crate::commands::convert::CorpusGrammar;
use crate::model::PaperRecord;
use crate::util::read_json_lines;

mod invariants;

use self::invariants::*;

pub fn run(args: ValidateArgs) -> Result<()> {
    let records: Vec<PaperRecord> = read_json_lines(&args.output)?;
    let grammar = CorpusGrammar::default();

    info!(path = %args.output.display(), records = records.len(), "validating output");

    let summary = collect_record_invariants(&records, &grammar);
    for violation in &summary.violations {
        warn!(
            paper_id = violation.paper_id,
            check = violation.check.as_str(),
            detail = %violation.detail,
            "invariant violated"
        );
    }

    info!(
        records = summary.record_count,
        footnoted_papers = summary.footnoted_papers,
        violations = summary.violations.len(),
        "validation summary"
    );

    if !summary.violations.is_empty() {
        bail!(
            "{} invariant violations in {}",
            summary.violations.len(),
            args.output.display()
        );
    }

    Ok(())
}
