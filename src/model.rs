use serde::{Deserialize, Serialize};

/// One line of the JSON Lines output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub paper_id: u32,
    pub title: String,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertCounts {
    pub papers_parsed: usize,
    pub papers_written: usize,
    pub duplicates_dropped: usize,
    pub signatures_synthesized: usize,
    pub footnotes: usize,
    pub papers_without_venue: usize,
    pub papers_without_date: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertPaths {
    pub input_path: String,
    pub output_path: String,
    pub manifest_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub generated_at: String,
    pub input_sha256: String,
    pub paths: ConvertPaths,
    pub counts: ConvertCounts,
    pub dropped_paper_ids: Vec<u32>,
    pub synthesized_signature_ids: Vec<u32>,
}
