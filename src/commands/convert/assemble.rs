use tracing::{debug, info};

use crate::error::StructuralError;
use crate::model::PaperRecord;

use super::body::{Body, extract_body};
use super::grammar::PaperPatterns;
use super::header::{Header, extract_header, parse_paper_id};
use super::line_source::{Boundary, LineSource, SourceLine, find_corpus_start};
use super::notes::normalize_footnotes;
use super::text::normalize_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Paper {
    pub id: u32,
    pub title: String,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub author: String,
    pub text: String,
    pub footnote_count: usize,
    pub signature_synthesized: bool,
}

impl Paper {
    pub fn to_record(&self) -> PaperRecord {
        PaperRecord {
            paper_id: self.id,
            title: self.title.clone(),
            venue: self.venue.clone(),
            date: self.date.clone(),
            author: self.author.clone(),
            text: self.text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedCorpus {
    pub papers: Vec<Paper>,
    pub parsed_count: usize,
    pub dropped_paper_ids: Vec<u32>,
}

/// Parses a whole transcription, front matter to end-of-corpus marker.
pub(crate) fn parse_corpus(
    input: &str,
    patterns: &PaperPatterns,
) -> Result<ParsedCorpus, StructuralError> {
    let mut source = LineSource::new(input);
    let mut next = Some(find_corpus_start(&mut source, patterns)?);
    let mut papers = Vec::<Paper>::new();

    while let Some(start) = next {
        let (paper, boundary) = parse_paper(start, &mut source, patterns)?;
        debug!(
            paper_id = paper.id,
            title = %paper.title,
            footnotes = paper.footnote_count,
            "parsed paper"
        );
        papers.push(paper);
        next = boundary.next_paper();
    }

    let parsed_count = papers.len();
    let (papers, dropped_paper_ids) =
        drop_alternate_transcription(papers, patterns.grammar.duplicate_paper_id);

    Ok(ParsedCorpus {
        papers,
        parsed_count,
        dropped_paper_ids,
    })
}

fn parse_paper<'a>(
    start: SourceLine<'a>,
    source: &mut LineSource<'a>,
    patterns: &PaperPatterns,
) -> Result<(Paper, Boundary<'a>), StructuralError> {
    let paper_id = parse_paper_id(start, patterns)?;
    let header = extract_header(source, patterns, paper_id)?;
    let (body, boundary) = extract_body(source, patterns, paper_id)?;
    let paper = assemble_paper(paper_id, header, body, patterns)?;
    Ok((paper, boundary))
}

pub(crate) fn assemble_paper(
    paper_id: u32,
    header: Header,
    body: Body,
    patterns: &PaperPatterns,
) -> Result<Paper, StructuralError> {
    let footnotes = normalize_footnotes(body.footnotes.as_deref(), patterns, paper_id)?;

    let mut text = format!(
        "{}:\n\n{}\n\n",
        body.addressee,
        normalize_text(&body.text, patterns)
    );

    let signature_synthesized = body.signature.is_none();
    match body.signature {
        Some(signature) => text.push_str(&signature),
        None => {
            info!(paper_id, "signature missing; adding default");
            text.push_str(&patterns.grammar.signature);
        }
    }

    if !footnotes.is_empty() {
        let rendered = footnotes
            .iter()
            .map(|note| note.render())
            .collect::<Vec<String>>()
            .join("\n\n");
        text.push_str("\n\n");
        text.push_str(&rendered);
    }
    text.push('\n');

    Ok(Paper {
        id: paper_id,
        title: header.title,
        venue: header.venue,
        date: header.date,
        author: header.author,
        text,
        footnote_count: footnotes.len(),
        signature_synthesized,
    })
}

/// Drops a paper that repeats its predecessor's id when that id is the
/// known duplicate. Returns the kept papers and the dropped ids.
pub(crate) fn drop_alternate_transcription(
    papers: Vec<Paper>,
    duplicate_paper_id: Option<u32>,
) -> (Vec<Paper>, Vec<u32>) {
    let Some(duplicate_id) = duplicate_paper_id else {
        return (papers, Vec::new());
    };

    let mut kept = Vec::<Paper>::with_capacity(papers.len());
    let mut dropped = Vec::<u32>::new();

    for paper in papers {
        let repeats_previous = kept.last().map(|previous| previous.id) == Some(paper.id);
        if paper.id == duplicate_id && repeats_previous {
            info!(paper_id = paper.id, "dropping alternate transcription");
            dropped.push(paper.id);
            continue;
        }
        kept.push(paper);
    }

    (kept, dropped)
}
