use crate::error::StructuralError;

use super::grammar::PaperPatterns;
use super::text::superscript;

/// One resolved footnote of a paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Footnote {
    pub id: u32,
    pub text: String,
}

impl Footnote {
    pub fn render(&self) -> String {
        format!("{} {}", superscript(&self.id.to_string()), self.text)
    }
}

/// Splits a raw footnote block into notes on blank lines. Lines inside a
/// note are trimmed and kept on separate lines.
pub(crate) fn split_notes(block: &str) -> Vec<String> {
    let mut notes = Vec::<String>::new();
    let mut current: Option<String> = None;

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            if let Some(note) = current.take() {
                notes.push(note);
            }
            continue;
        }

        match current.as_mut() {
            Some(note) => {
                note.push('\n');
                note.push_str(line);
            }
            None => current = Some(line.to_string()),
        }
    }

    if let Some(note) = current {
        notes.push(note);
    }

    notes
}

/// Resolves every note of a block, in source order.
pub(crate) fn normalize_footnotes(
    block: Option<&str>,
    patterns: &PaperPatterns,
    paper_id: u32,
) -> Result<Vec<Footnote>, StructuralError> {
    let Some(block) = block else {
        return Ok(Vec::new());
    };

    split_notes(block)
        .iter()
        .enumerate()
        .map(|(index, note)| resolve_note(note, index + 1, patterns, paper_id))
        .collect()
}

/// Uses the explicit id on the first line when there is one, otherwise the
/// 1-based position of the note.
pub(crate) fn resolve_note(
    note: &str,
    position: usize,
    patterns: &PaperPatterns,
    paper_id: u32,
) -> Result<Footnote, StructuralError> {
    let malformed = || StructuralError::MalformedFootnote {
        paper_id,
        note: note.to_string(),
    };

    let (first_line, rest) = match note.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (note, None),
    };

    let captures = patterns.note_prefix.captures(first_line).ok_or_else(malformed)?;
    let id = match captures.name("id") {
        Some(value) => value.as_str().parse::<u32>().map_err(|_| malformed())?,
        None => u32::try_from(position).map_err(|_| malformed())?,
    };
    let mut text = captures
        .name("text")
        .map(|value| value.as_str().to_string())
        .ok_or_else(malformed)?;

    if let Some(rest) = rest {
        text.push('\n');
        text.push_str(rest);
    }

    Ok(Footnote { id, text })
}
