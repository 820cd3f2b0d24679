//! Structural failures raised while reading the corpus.
//!
//! Every variant means the same thing: the text did not have the shape the
//! corpus grammar requires at that point. There is no recovery; the run
//! aborts before any output is written.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("couldn't find the start-of-corpus marker '{marker}'")]
    MissingStartMarker { marker: String },

    #[error("invalid paper start at line {line}: '{text}'")]
    MalformedId { line: usize, text: String },

    #[error("malformed header for paper {paper_id} at line {line}: '{text}'")]
    MalformedHeader {
        paper_id: u32,
        line: usize,
        text: String,
    },

    #[error("malformed header for paper {paper_id}; couldn't find author line")]
    MissingAuthor { paper_id: u32 },

    #[error("malformed body for paper {paper_id}; couldn't find addressee{}", .found.as_ref().map(|(line, text)| format!(" (line {line}: '{text}')")).unwrap_or_default())]
    MissingAddressee {
        paper_id: u32,
        found: Option<(usize, String)>,
    },

    #[error("malformed body for paper {paper_id}; couldn't find end of paper")]
    UnterminatedBody { paper_id: u32 },

    #[error("couldn't find the end-of-corpus marker '{marker}' after paper {paper_id}")]
    MissingEndMarker { paper_id: u32, marker: String },

    #[error("malformed footnote in paper {paper_id}: '{note}'")]
    MalformedFootnote { paper_id: u32, note: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_addressee_mentions_offending_line() {
        let err = StructuralError::MissingAddressee {
            paper_id: 4,
            found: Some((120, "Something else".to_string())),
        };
        assert_eq!(
            err.to_string(),
            "malformed body for paper 4; couldn't find addressee (line 120: 'Something else')"
        );
    }

    #[test]
    fn missing_addressee_at_end_of_input_has_no_line() {
        let err = StructuralError::MissingAddressee {
            paper_id: 4,
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "malformed body for paper 4; couldn't find addressee"
        );
    }
}
