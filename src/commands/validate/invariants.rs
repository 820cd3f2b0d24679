use crate::commands::convert::CorpusGrammar;
use crate::model::PaperRecord;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum InvariantCheck {
    IdOrder,
    EmptyTitle,
    AuthorCase,
    UnknownVenue,
    TrailingNewline,
    MissingSignature,
}

impl InvariantCheck {
    pub(super) fn as_str(self) -> &'static str {
        match self {
            Self::IdOrder => "id_order",
            Self::EmptyTitle => "empty_title",
            Self::AuthorCase => "author_case",
            Self::UnknownVenue => "unknown_venue",
            Self::TrailingNewline => "trailing_newline",
            Self::MissingSignature => "missing_signature",
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct InvariantViolation {
    pub(super) paper_id: u32,
    pub(super) check: InvariantCheck,
    pub(super) detail: String,
}

#[derive(Debug, Default)]
pub(super) struct RecordInvariantSummary {
    pub(super) record_count: usize,
    pub(super) footnoted_papers: usize,
    pub(super) violations: Vec<InvariantViolation>,
}

pub(super) fn collect_record_invariants(
    records: &[PaperRecord],
    grammar: &CorpusGrammar,
) -> RecordInvariantSummary {
    let mut summary = RecordInvariantSummary {
        record_count: records.len(),
        ..RecordInvariantSummary::default()
    };
    let mut previous_id: Option<u32> = None;

    for record in records {
        let mut violate = |check: InvariantCheck, detail: String| {
            summary.violations.push(InvariantViolation {
                paper_id: record.paper_id,
                check,
                detail,
            });
        };

        if let Some(previous) = previous_id {
            if record.paper_id <= previous {
                violate(
                    InvariantCheck::IdOrder,
                    format!("id {} follows {}", record.paper_id, previous),
                );
            }
        }
        previous_id = Some(record.paper_id);

        if record.title.trim().is_empty() {
            violate(InvariantCheck::EmptyTitle, "title is empty".to_string());
        }

        if !author_is_uppercase(&record.author) {
            violate(
                InvariantCheck::AuthorCase,
                format!("author '{}' is not all uppercase", record.author),
            );
        }

        if let Some(venue) = record.venue.as_deref() {
            if !grammar.venues.iter().any(|known| known == venue) {
                violate(
                    InvariantCheck::UnknownVenue,
                    format!("venue '{venue}' is not a known venue"),
                );
            }
        }

        if !record.text.ends_with('\n') || record.text.ends_with("\n\n") {
            violate(
                InvariantCheck::TrailingNewline,
                "text must end with exactly one newline".to_string(),
            );
        }

        if !record.text.contains(grammar.signature.as_str()) {
            violate(
                InvariantCheck::MissingSignature,
                format!("text has no '{}' signature", grammar.signature),
            );
        }

        if has_footnotes(&record.text, &grammar.signature) {
            summary.footnoted_papers += 1;
        }
    }

    summary
}

fn author_is_uppercase(author: &str) -> bool {
    !author.trim().is_empty()
        && author
            .chars()
            .all(|value| value.is_ascii_uppercase() || value == ' ')
}

fn has_footnotes(text: &str, signature: &str) -> bool {
    text.rsplit_once(signature)
        .map(|(_, tail)| !tail.trim().is_empty())
        .unwrap_or(false)
}
