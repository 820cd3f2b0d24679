use crate::error::StructuralError;

use super::grammar::PaperPatterns;
use super::line_source::{LineSource, SourceLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub title: String,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub author: String,
}

pub(crate) fn parse_paper_id(
    line: SourceLine<'_>,
    patterns: &PaperPatterns,
) -> Result<u32, StructuralError> {
    patterns
        .paper_id(line.text)
        .ok_or_else(|| StructuralError::MalformedId {
            line: line.number,
            text: line.text.to_string(),
        })
}

/// Reads header lines up to and including the all-caps author line.
pub(crate) fn extract_header(
    source: &mut LineSource<'_>,
    patterns: &PaperPatterns,
    paper_id: u32,
) -> Result<Header, StructuralError> {
    let first_line = source.line_number() + 1;
    let mut meta = String::new();

    while let Some(line) = source.next_line() {
        if let Some(captures) = patterns.author_line.captures(line.text) {
            let author = captures
                .get(1)
                .map(|value| value.as_str().trim().to_string())
                .unwrap_or_default();
            let (title, venue, date) = decompose_meta(&meta, patterns).ok_or_else(|| {
                StructuralError::MalformedHeader {
                    paper_id,
                    line: first_line,
                    text: meta.trim().to_string(),
                }
            })?;

            return Ok(Header {
                title,
                venue,
                date,
                author,
            });
        }

        meta.push(' ');
        meta.push_str(line.text.trim());
    }

    Err(StructuralError::MissingAuthor { paper_id })
}

/// Splits accumulated header text into title, venue and date.
pub(crate) fn decompose_meta(
    meta: &str,
    patterns: &PaperPatterns,
) -> Option<(String, Option<String>, Option<String>)> {
    let captures = patterns.header_meta.captures(meta)?;

    let title = captures
        .name("title")
        .map(|value| condense_whitespace(value.as_str()))
        .filter(|value| !value.is_empty())?;
    let venue = captures
        .name("venue")
        .map(|value| value.as_str().to_string());
    let date = captures.name("date").map(|value| value.as_str().to_string());

    Some((title, venue, date))
}

fn condense_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}
