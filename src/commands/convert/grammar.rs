use anyhow::{Context, Result};
use regex::Regex;

pub(crate) const DEFAULT_SERIES_NAME: &str = "FEDERALIST";
pub(crate) const DEFAULT_SIGNATURE: &str = "PUBLIUS.";
pub(crate) const DEFAULT_END_MARKER: &str = "End of the Project Gutenberg EBook";
pub(crate) const DEFAULT_BOILERPLATE: &str =
    "*There are two slightly different versions of No. 70";
pub(crate) const DEFAULT_ANOMALOUS_FOOTNOTE_TOKEN: &str = "FNA1-@";
pub(crate) const DEFAULT_DUPLICATE_PAPER_ID: u32 = 70;

pub(crate) const KNOWN_VENUES: &[&str] = &[
    "For the Independent Journal",
    "For the Independent Fournal",
    "From the New York Packet",
    "From the Daily Advertiser",
    "From McLEAN's Edition, New York",
    "From McLEAN'S Edition, New York",
    "From MCLEAN's Edition, New York",
    "From MCLEAN'S Edition, New York",
];

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Literal markers of one transcription.
#[derive(Debug, Clone)]
pub(crate) struct CorpusGrammar {
    pub series_name: String,
    pub signature: String,
    pub end_marker: String,
    pub boilerplate: String,
    pub venues: Vec<String>,
    pub anomalous_footnote_token: String,
    /// Id whose second consecutive occurrence is an alternate transcription.
    pub duplicate_paper_id: Option<u32>,
}

impl Default for CorpusGrammar {
    fn default() -> Self {
        Self {
            series_name: DEFAULT_SERIES_NAME.to_string(),
            signature: DEFAULT_SIGNATURE.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            boilerplate: DEFAULT_BOILERPLATE.to_string(),
            venues: KNOWN_VENUES.iter().map(|venue| venue.to_string()).collect(),
            anomalous_footnote_token: DEFAULT_ANOMALOUS_FOOTNOTE_TOKEN.to_string(),
            duplicate_paper_id: Some(DEFAULT_DUPLICATE_PAPER_ID),
        }
    }
}

impl CorpusGrammar {
    pub fn is_end_marker(&self, line: &str) -> bool {
        line.starts_with(&self.end_marker)
    }

    pub fn is_boilerplate(&self, line: &str) -> bool {
        line.starts_with(&self.boilerplate)
    }
}

/// Compiled patterns for one grammar.
#[derive(Debug)]
pub(crate) struct PaperPatterns {
    pub grammar: CorpusGrammar,
    pub corpus_start: Regex,
    pub paper_start: Regex,
    pub author_line: Regex,
    pub header_meta: Regex,
    pub addressee: Regex,
    pub footnote_marker: Regex,
    pub bracket_marker: Regex,
    pub note_prefix: Regex,
}

impl PaperPatterns {
    pub fn new(grammar: CorpusGrammar) -> Result<Self> {
        let series = regex::escape(&grammar.series_name);
        let venues = grammar
            .venues
            .iter()
            .map(|venue| regex::escape(venue))
            .collect::<Vec<String>>()
            .join("|");
        let token = regex::escape(&grammar.anomalous_footnote_token);
        let months = MONTHS.join("|");

        Ok(Self {
            corpus_start: Regex::new(&format!(r"^{series}\. No\. \d+"))
                .context("failed to compile corpus start regex")?,
            paper_start: Regex::new(&format!(r"^{series}\.? No\. (\d+)\s*$"))
                .context("failed to compile paper start regex")?,
            author_line: Regex::new(r"^([A-Z ]*[A-Z][A-Z ]*?)\s*$")
                .context("failed to compile author line regex")?,
            header_meta: Regex::new(&format!(
                r"^(?P<title>[^.]*?)(?:(?P<venue>{venues})\.)?\s*(?:(?P<date>(?:\w+, )?\b(?:{months}) \d+, \d+)\.)?\s*$"
            ))
            .context("failed to compile header regex")?,
            addressee: Regex::new(r"^(To .*)[.:]\s*$")
                .context("failed to compile addressee regex")?,
            footnote_marker: Regex::new(r#"(\.|\D,|"|;|[A-Za-z])(\d+)(%?)([^.]|$)"#)
                .context("failed to compile footnote marker regex")?,
            bracket_marker: Regex::new(r" \[(\d+)\]")
                .context("failed to compile bracket marker regex")?,
            note_prefix: Regex::new(&format!(
                r"^(?:(?:{token})?(?P<id>\d+)\.?\s+)?(?:[\]P]\s+)?(?P<text>\S.*)$"
            ))
            .context("failed to compile footnote prefix regex")?,
            grammar,
        })
    }

    /// Numeric id of a paper-start line, if it is one.
    pub fn paper_id(&self, line: &str) -> Option<u32> {
        self.paper_start
            .captures(line)
            .and_then(|captures| captures.get(1))
            .and_then(|value| value.as_str().parse::<u32>().ok())
    }

    pub fn is_paper_start(&self, line: &str) -> bool {
        self.paper_start.is_match(line)
    }
}
