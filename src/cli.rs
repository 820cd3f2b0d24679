use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "federalist",
    version,
    about = "Convert the Project Gutenberg Federalist Papers transcription into JSON Lines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(ConvertArgs),
    Status(StatusArgs),
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(long, default_value = "pg18.txt")]
    pub input: PathBuf,

    #[arg(long, default_value = "federalist.json")]
    pub output: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Keep the alternate transcription of No. 70 instead of dropping it.
    #[arg(long, default_value_t = false)]
    pub keep_duplicate: bool,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = "federalist.json")]
    pub output: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long, default_value = "federalist.json")]
    pub output: PathBuf,
}

/// Manifest path used when none is given: `<output>.manifest.json`.
pub fn default_manifest_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|value| value.to_os_string())
        .unwrap_or_default();
    name.push(".manifest.json");
    output.with_file_name(name)
}
