use crate::error::StructuralError;

use super::assemble::{drop_alternate_transcription, parse_corpus};
use super::grammar::{CorpusGrammar, PaperPatterns};
use super::header::decompose_meta;
use super::notes::{normalize_footnotes, resolve_note, split_notes};
use super::run::summarize;
use super::text::{normalize_text, superscript};

const TWO_PAPERS: &str = "\
The Project Gutenberg EBook of The Federalist Papers

FEDERALIST. No. 5

Concerning Dangers from Foreign Force and Influence
For the Independent Journal. Saturday, November 10, 1787.

JAY

To the People of the State of New York:

QUEEN ANNE, in her letter of the 1st July, 1706, to the Scotch
Parliament, makes some observations;3 on the importance of the UNION.

PUBLIUS.

3. Quoted from the letter of 1706.



FEDERALIST No. 6

Concerning Dangers from Dissensions Between the States

HAMILTON

To the People of the State of New York:

THE three last numbers of this paper have been dedicated.

End of the Project Gutenberg EBook of The Federalist Papers
";

fn patterns() -> PaperPatterns {
    PaperPatterns::new(CorpusGrammar::default()).expect("default grammar compiles")
}

fn paper_block(id: u32, title: &str, body: &str) -> String {
    format!(
        "FEDERALIST No. {id}\n\n{title}\n\nHAMILTON\n\nTo the People of the State of New York:\n\n{body}\n\nPUBLIUS.\n\n"
    )
}

#[test]
fn superscript_maps_every_digit() {
    assert_eq!(superscript("1234567890"), "¹²³⁴⁵⁶⁷⁸⁹⁰");
    assert_eq!(superscript("20"), "²⁰");
}

#[test]
fn normalize_text_rewrites_glued_markers() {
    let patterns = patterns();
    assert_eq!(
        normalize_text("profits20 and losses", &patterns),
        "profits²⁰ and losses"
    );
    assert_eq!(
        normalize_text("the end of the States.12", &patterns),
        "the end of the States.¹²"
    );
    assert_eq!(
        normalize_text("\"a quotation\"4 follows", &patterns),
        "\"a quotation\"⁴ follows"
    );
    assert_eq!(
        normalize_text("the several States,3 and", &patterns),
        "the several States,³ and"
    );
}

#[test]
fn normalize_text_leaves_plain_numbers_alone() {
    let patterns = patterns();
    assert_eq!(normalize_text("the year 1787.", &patterns), "the year 1787.");
    assert_eq!(
        normalize_text("about 3,000,000 of people", &patterns),
        "about 3,000,000 of people"
    );
}

#[test]
fn normalize_text_keeps_percent_after_marker() {
    let patterns = patterns();
    assert_eq!(
        normalize_text("at an interest6% per annum", &patterns),
        "at an interest⁶% per annum"
    );
}

#[test]
fn normalize_text_is_idempotent() {
    let patterns = patterns();
    let raw = "\n  First line with a note;1 here.\nSecond line, in 1787, ends with a note.2\n\n";
    let once = normalize_text(raw, &patterns);
    assert_eq!(
        once,
        "First line with a note;¹ here.\nSecond line, in 1787, ends with a note.²"
    );
    assert_eq!(normalize_text(&once, &patterns), once);
}

#[test]
fn decompose_meta_reads_venue_and_weekday_date() {
    let patterns = patterns();
    let (title, venue, date) = decompose_meta(
        "  The Same Subject  Continued For the Independent Journal. Tuesday, November 27, 1787. ",
        &patterns,
    )
    .expect("header matches");
    assert_eq!(title, "The Same Subject Continued");
    assert_eq!(venue.as_deref(), Some("For the Independent Journal"));
    assert_eq!(date.as_deref(), Some("Tuesday, November 27, 1787"));
}

#[test]
fn decompose_meta_accepts_missing_fields() {
    let patterns = patterns();

    let (title, venue, date) =
        decompose_meta(" The Judiciary Department From McLEAN's Edition, New York. ", &patterns)
            .expect("venue-only header matches");
    assert_eq!(title, "The Judiciary Department");
    assert_eq!(venue.as_deref(), Some("From McLEAN's Edition, New York"));
    assert_eq!(date, None);

    let (title, venue, date) =
        decompose_meta(" General Introduction  January 1, 1788. ", &patterns)
            .expect("date-only header matches");
    assert_eq!(title, "General Introduction");
    assert_eq!(venue, None);
    assert_eq!(date.as_deref(), Some("January 1, 1788"));

    let (title, venue, date) =
        decompose_meta(" Concerning the Militia ", &patterns).expect("title-only header matches");
    assert_eq!(title, "Concerning the Militia");
    assert_eq!(venue, None);
    assert_eq!(date, None);
}

#[test]
fn decompose_meta_keeps_last_title_word_before_plain_date() {
    let patterns = patterns();

    let (title, venue, date) = decompose_meta(" General Introduction January 1, 1788. ", &patterns)
        .expect("single-spaced date header matches");
    assert_eq!(title, "General Introduction");
    assert_eq!(venue, None);
    assert_eq!(date.as_deref(), Some("January 1, 1788"));

    let (title, _, date) = decompose_meta(
        " The Same Subject Continued Thursday January 10, 1788. ",
        &patterns,
    )
    .expect("weekday without comma stays in the title");
    assert_eq!(title, "The Same Subject Continued Thursday");
    assert_eq!(date.as_deref(), Some("January 10, 1788"));
}

#[test]
fn decompose_meta_requires_period_after_date() {
    let patterns = patterns();
    assert!(decompose_meta(" General Introduction January 1, 1788", &patterns).is_none());
}

#[test]
fn title_line_followed_by_date_line_parses_both() {
    let patterns = patterns();
    let input = "\
FEDERALIST. No. 14

The Union as a Safeguard
November 21, 1787.

MADISON

To the People of the State of New York:

Body.

PUBLIUS.

End of the Project Gutenberg EBook of The Federalist Papers
";

    let corpus = parse_corpus(input, &patterns).expect("corpus parses");
    let paper = &corpus.papers[0];
    assert_eq!(paper.title, "The Union as a Safeguard");
    assert_eq!(paper.venue, None);
    assert_eq!(paper.date.as_deref(), Some("November 21, 1787"));
    assert_eq!(paper.author, "MADISON");
}

#[test]
fn decompose_meta_rejects_unknown_clauses() {
    let patterns = patterns();
    assert!(decompose_meta(" A Title. Printed somewhere else. ", &patterns).is_none());
    assert!(decompose_meta("   ", &patterns).is_none());
}

#[test]
fn split_notes_breaks_on_blank_lines() {
    let notes = split_notes("\n  First note.\n\n\nSecond note\n   continued here.  \n");
    assert_eq!(notes, vec!["First note.", "Second note\ncontinued here."]);
}

#[test]
fn footnotes_without_ids_are_numbered_by_position() {
    let patterns = patterns();
    let notes = normalize_footnotes(
        Some("Plutarch's Life of Pericles.\n\nIdem.\n\nWorcester Magazine.\n"),
        &patterns,
        6,
    )
    .expect("notes resolve");

    let ids = notes.iter().map(|note| note.id).collect::<Vec<u32>>();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(notes[1].render(), "² Idem.");
}

#[test]
fn footnotes_use_explicit_ids_in_source_order() {
    let patterns = patterns();
    let notes = normalize_footnotes(
        Some("12. The later note.\nSecond line.\n\nFNA1-@4 An anomalous marker.\n\nP An unnumbered remark.\n"),
        &patterns,
        11,
    )
    .expect("notes resolve");

    let ids = notes.iter().map(|note| note.id).collect::<Vec<u32>>();
    assert_eq!(ids, vec![12, 4, 3]);
    assert_eq!(notes[0].render(), "¹² The later note.\nSecond line.");
    assert_eq!(notes[1].render(), "⁴ An anomalous marker.");
    assert_eq!(notes[2].render(), "³ An unnumbered remark.");
}

#[test]
fn missing_footnote_block_yields_no_notes() {
    let patterns = patterns();
    let notes = normalize_footnotes(None, &patterns, 1).expect("no notes");
    assert!(notes.is_empty());
}

#[test]
fn resolve_note_rejects_unrecognized_prefix() {
    let patterns = patterns();
    let err = resolve_note(" indented note", 1, &patterns, 9).expect_err("must fail");
    assert_eq!(
        err,
        StructuralError::MalformedFootnote {
            paper_id: 9,
            note: " indented note".to_string(),
        }
    );

    let err = resolve_note("99999999999 overflowing id", 1, &patterns, 9).expect_err("must fail");
    assert!(matches!(err, StructuralError::MalformedFootnote { .. }));
}

#[test]
fn parses_two_paper_corpus_end_to_end() {
    let patterns = patterns();
    let corpus = parse_corpus(TWO_PAPERS, &patterns).expect("corpus parses");

    assert_eq!(corpus.parsed_count, 2);
    assert_eq!(corpus.papers.len(), 2);

    let first = corpus.papers[0].to_record();
    assert_eq!(first.paper_id, 5);
    assert_eq!(
        first.title,
        "Concerning Dangers from Foreign Force and Influence"
    );
    assert_eq!(first.venue.as_deref(), Some("For the Independent Journal"));
    assert_eq!(first.date.as_deref(), Some("Saturday, November 10, 1787"));
    assert_eq!(first.author, "JAY");
    assert_eq!(
        first.text,
        "To the People of the State of New York:\n\n\
         QUEEN ANNE, in her letter of the 1st July, 1706, to the Scotch\n\
         Parliament, makes some observations;³ on the importance of the UNION.\n\n\
         PUBLIUS.\n\n\
         ³ Quoted from the letter of 1706.\n"
    );

    let second = corpus.papers[1].to_record();
    assert_eq!(second.paper_id, 6);
    assert_eq!(second.venue, None);
    assert_eq!(second.date, None);
    assert_eq!(second.author, "HAMILTON");
    assert!(corpus.papers[1].signature_synthesized);
    assert_eq!(
        second.text,
        "To the People of the State of New York:\n\n\
         THE three last numbers of this paper have been dedicated.\n\n\
         PUBLIUS.\n"
    );

    let json = serde_json::to_value(&second).expect("record serializes");
    assert!(json["venue"].is_null());
    assert!(json["date"].is_null());
    assert_eq!(json["paper_id"], 6);
}

#[test]
fn summarize_counts_corpus_features() {
    let patterns = patterns();
    let corpus = parse_corpus(TWO_PAPERS, &patterns).expect("corpus parses");
    let counts = summarize(&corpus);

    assert_eq!(counts.papers_parsed, 2);
    assert_eq!(counts.papers_written, 2);
    assert_eq!(counts.duplicates_dropped, 0);
    assert_eq!(counts.signatures_synthesized, 1);
    assert_eq!(counts.footnotes, 1);
    assert_eq!(counts.papers_without_venue, 1);
    assert_eq!(counts.papers_without_date, 1);
}

#[test]
fn boilerplate_line_is_skipped_inside_footnotes() {
    let patterns = patterns();
    let input = "\
FEDERALIST. No. 70

The Executive Department Further Considered

HAMILTON

To the People of the State of New York:

There is an idea1 which is not without its advocates.

PUBLIUS.

1. De Lolme.

*There are two slightly different versions of No. 70 included here.

2. New York has no council.

End of the Project Gutenberg EBook of The Federalist Papers
";

    let corpus = parse_corpus(input, &patterns).expect("corpus parses");
    let text = &corpus.papers[0].text;
    assert!(!text.contains("slightly different versions"));
    assert!(text.ends_with("PUBLIUS.\n\n¹ De Lolme.\n\n² New York has no council.\n"));
    assert!(text.contains("an idea¹ which"));
}

#[test]
fn signature_line_splits_body_and_footnotes() {
    let patterns = patterns();
    let input = "\
FEDERALIST. No. 2

Concerning Dangers from Foreign Force and Influence

JAY

To the People of the State of New York.

And so we conclude. PUBLIUS. 1. A trailing note.
End of the Project Gutenberg EBook of The Federalist Papers
";

    let corpus = parse_corpus(input, &patterns).expect("corpus parses");
    assert_eq!(
        corpus.papers[0].text,
        "To the People of the State of New York:\n\nAnd so we conclude.\n\nPUBLIUS.\n\n¹ A trailing note.\n"
    );
    assert!(!corpus.papers[0].signature_synthesized);
}

#[test]
fn alternate_transcription_of_duplicate_paper_is_dropped() {
    let patterns = patterns();
    let mut input = String::from("FEDERALIST. No. 69\n\nThe Real Character of the Executive\n\nHAMILTON\n\nTo the People of the State of New York:\n\nBody.\n\nPUBLIUS.\n\n");
    input.push_str(&paper_block(70, "The Executive Department Further Considered", "First version."));
    input.push_str(&paper_block(70, "The Executive Department Further Considered", "Second version."));
    input.push_str(&paper_block(71, "The Duration in Office of the Executive", "Body."));
    input.push_str("End of the Project Gutenberg EBook of The Federalist Papers\n");

    let corpus = parse_corpus(&input, &patterns).expect("corpus parses");
    let ids = corpus
        .papers
        .iter()
        .map(|paper| paper.id)
        .collect::<Vec<u32>>();

    assert_eq!(corpus.parsed_count, 4);
    assert_eq!(ids, vec![69, 70, 71]);
    assert_eq!(corpus.papers.len(), corpus.parsed_count - 1);
    assert_eq!(corpus.dropped_paper_ids, vec![70]);
    assert!(corpus.papers[1].text.contains("First version."));
}

#[test]
fn duplicate_filter_is_keyed_by_id_not_position() {
    let patterns = patterns();
    let mut input = String::from("FEDERALIST. No. 1\n\nGeneral Introduction\n\nHAMILTON\n\nTo the People of the State of New York:\n\nBody.\n\nPUBLIUS.\n\n");
    input.push_str(&paper_block(1, "General Introduction", "Repeated."));
    input.push_str("End of the Project Gutenberg EBook of The Federalist Papers\n");

    let corpus = parse_corpus(&input, &patterns).expect("corpus parses");
    assert_eq!(corpus.papers.len(), 2);

    let (kept, dropped) = drop_alternate_transcription(corpus.papers.clone(), None);
    assert_eq!(kept.len(), 2);
    assert!(dropped.is_empty());
}

#[test]
fn missing_start_marker_is_structural_error() {
    let patterns = patterns();
    let err = parse_corpus("Nothing to see here.\n", &patterns).expect_err("must fail");
    assert!(matches!(err, StructuralError::MissingStartMarker { .. }));
}

#[test]
fn malformed_id_line_is_structural_error() {
    let patterns = patterns();
    let err = parse_corpus("FEDERALIST. No. 5 (continued)\n", &patterns).expect_err("must fail");
    assert_eq!(
        err,
        StructuralError::MalformedId {
            line: 1,
            text: "FEDERALIST. No. 5 (continued)".to_string(),
        }
    );
}

#[test]
fn header_without_author_is_structural_error() {
    let patterns = patterns();
    let err = parse_corpus("FEDERALIST. No. 3\n\nThe Same Subject Continued\n", &patterns)
        .expect_err("must fail");
    assert_eq!(err, StructuralError::MissingAuthor { paper_id: 3 });
}

#[test]
fn header_with_unknown_venue_is_structural_error() {
    let patterns = patterns();
    let err = parse_corpus(
        "FEDERALIST. No. 3\n\nA Title. From Somewhere Else.\n\nJAY\n",
        &patterns,
    )
    .expect_err("must fail");
    assert!(matches!(
        err,
        StructuralError::MalformedHeader {
            paper_id: 3,
            line: 2,
            ..
        }
    ));
}

#[test]
fn missing_addressee_is_structural_error() {
    let patterns = patterns();
    let err = parse_corpus(
        "FEDERALIST. No. 4\n\nA Title\n\nJAY\n\nDear reader,\n",
        &patterns,
    )
    .expect_err("must fail");
    assert_eq!(
        err,
        StructuralError::MissingAddressee {
            paper_id: 4,
            found: Some((7, "Dear reader,".to_string())),
        }
    );
}

#[test]
fn body_without_terminator_is_structural_error() {
    let patterns = patterns();
    let err = parse_corpus(
        "FEDERALIST. No. 4\n\nA Title\n\nJAY\n\nTo the People of the State of New York:\n\nText.\n",
        &patterns,
    )
    .expect_err("must fail");
    assert_eq!(err, StructuralError::UnterminatedBody { paper_id: 4 });
}

#[test]
fn footnotes_without_end_marker_are_structural_error() {
    let patterns = patterns();
    let err = parse_corpus(
        "FEDERALIST. No. 4\n\nA Title\n\nJAY\n\nTo the People of the State of New York:\n\nText.\n\nPUBLIUS.\n\n1. A note.\n",
        &patterns,
    )
    .expect_err("must fail");
    assert!(matches!(
        err,
        StructuralError::MissingEndMarker { paper_id: 4, .. }
    ));
}
