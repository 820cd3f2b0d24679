use std::str::Lines;

use crate::error::StructuralError;

use super::grammar::PaperPatterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Forward-only reader over the corpus text. Lines are numbered from 1.
///
/// There is no pushback: a reader that consumes a line belonging to the
/// next unit hands it back as a [`Boundary`].
#[derive(Debug)]
pub(crate) struct LineSource<'a> {
    lines: Lines<'a>,
    consumed: usize,
}

impl<'a> LineSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            consumed: 0,
        }
    }

    pub fn next_line(&mut self) -> Option<SourceLine<'a>> {
        let text = self.lines.next()?;
        self.consumed += 1;
        Some(SourceLine {
            number: self.consumed,
            text,
        })
    }

    /// Number of the last line handed out, 0 before the first read.
    pub fn line_number(&self) -> usize {
        self.consumed
    }
}

/// How a paper segment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary<'a> {
    /// The start line of the next paper, already consumed from the source.
    NextPaper(SourceLine<'a>),
    EndOfCorpus,
}

impl<'a> Boundary<'a> {
    pub fn next_paper(self) -> Option<SourceLine<'a>> {
        match self {
            Self::NextPaper(line) => Some(line),
            Self::EndOfCorpus => None,
        }
    }
}

/// Skips the front matter and returns the first paper's start line.
pub(crate) fn find_corpus_start<'a>(
    source: &mut LineSource<'a>,
    patterns: &PaperPatterns,
) -> Result<SourceLine<'a>, StructuralError> {
    while let Some(line) = source.next_line() {
        if patterns.corpus_start.is_match(line.text) {
            return Ok(line);
        }
    }

    Err(StructuralError::MissingStartMarker {
        marker: format!("{}. No. <n>", patterns.grammar.series_name),
    })
}
