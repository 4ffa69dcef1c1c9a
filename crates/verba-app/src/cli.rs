use std::path::PathBuf;

use clap::Parser;

/// Convert a plain-text vocabulary list into study-page data files
#[derive(Debug, Parser)]
#[command(name = "verba", version, about)]
pub struct Cli {
    /// Path to the vocabulary text file
    pub input: PathBuf,

    /// Path of the JSON document artifact
    #[arg(long, default_value = "words.json")]
    pub json: PathBuf,

    /// Path of the browser script artifact
    #[arg(long, default_value = "data.js")]
    pub script: PathBuf,

    /// Skip writing the browser script artifact
    #[arg(long)]
    pub no_script: bool,

    /// Variable name assigned in the script artifact
    #[arg(long)]
    pub var_name: Option<String>,

    /// Indent width of the JSON artifact
    #[arg(long)]
    pub json_indent: Option<usize>,
}
