use crate::error::StructuralError;

use super::grammar::PaperPatterns;
use super::line_source::{Boundary, LineSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Body {
    pub addressee: String,
    pub text: String,
    pub signature: Option<String>,
    pub footnotes: Option<String>,
}

pub(crate) fn extract_body<'a>(
    source: &mut LineSource<'a>,
    patterns: &PaperPatterns,
    paper_id: u32,
) -> Result<(Body, Boundary<'a>), StructuralError> {
    let addressee = extract_addressee(source, patterns, paper_id)?;
    let grammar = &patterns.grammar;
    let mut text = String::new();

    while let Some(line) = source.next_line() {
        if patterns.is_paper_start(line.text) {
            let body = Body {
                addressee,
                text,
                signature: None,
                footnotes: None,
            };
            return Ok((body, Boundary::NextPaper(line)));
        }

        if grammar.is_end_marker(line.text) {
            let body = Body {
                addressee,
                text,
                signature: None,
                footnotes: None,
            };
            return Ok((body, Boundary::EndOfCorpus));
        }

        if let Some((before, after)) = line.text.rsplit_once(grammar.signature.as_str()) {
            text.push_str(before);
            let (footnotes, boundary) = extract_footnote_block(after, source, patterns, paper_id)?;
            let body = Body {
                addressee,
                text,
                signature: Some(grammar.signature.clone()),
                footnotes: Some(footnotes),
            };
            return Ok((body, boundary));
        }

        text.push_str(line.text);
        text.push('\n');
    }

    Err(StructuralError::UnterminatedBody { paper_id })
}

/// Skips blank lines and returns the "To ..." line without its final `.` or `:`.
fn extract_addressee(
    source: &mut LineSource<'_>,
    patterns: &PaperPatterns,
    paper_id: u32,
) -> Result<String, StructuralError> {
    while let Some(line) = source.next_line() {
        if line.text.trim().is_empty() {
            continue;
        }

        return patterns
            .addressee
            .captures(line.text)
            .and_then(|captures| captures.get(1))
            .map(|value| value.as_str().to_string())
            .ok_or_else(|| StructuralError::MissingAddressee {
                paper_id,
                found: Some((line.number, line.text.to_string())),
            });
    }

    Err(StructuralError::MissingAddressee {
        paper_id,
        found: None,
    })
}

/// Collects raw footnote text after the signature until the next paper or
/// the end of the corpus. The duplicate-version disclaimer is dropped.
pub(crate) fn extract_footnote_block<'a>(
    first_chunk: &str,
    source: &mut LineSource<'a>,
    patterns: &PaperPatterns,
    paper_id: u32,
) -> Result<(String, Boundary<'a>), StructuralError> {
    let grammar = &patterns.grammar;
    let mut block = String::new();
    if !first_chunk.trim().is_empty() {
        block.push_str(first_chunk);
        block.push('\n');
    }

    while let Some(line) = source.next_line() {
        if patterns.is_paper_start(line.text) {
            return Ok((block, Boundary::NextPaper(line)));
        }

        if grammar.is_end_marker(line.text) {
            return Ok((block, Boundary::EndOfCorpus));
        }

        if grammar.is_boilerplate(line.text) {
            continue;
        }

        block.push_str(line.text);
        block.push('\n');
    }

    Err(StructuralError::MissingEndMarker {
        paper_id,
        marker: grammar.end_marker.clone(),
    })
}
