use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use verba_config::Config;
use verba_core::document;
use verba_export::{ScriptTemplate, to_json_pretty};
use verba_lang_latin::LatinGrammar;

use crate::cli::Cli;
use crate::error::AppError;

mod cli;
mod error;
mod io;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::new();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli, &config) {
        Ok(Some(summary)) => {
            println!("Successfully converted {} chapters.", summary.chapters);
            println!("Output files created:");
            for path in &summary.artifacts {
                println!("  - {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

#[derive(Debug)]
struct Summary {
    chapters: usize,
    artifacts: Vec<PathBuf>,
}

/// Run one conversion. Returns None when no chapter heading was
/// recognized; no artifact is written in that case.
fn run(cli: &Cli, config: &Config) -> Result<Option<Summary>, AppError> {
    let text = io::read_input(&cli.input)?;

    let grammar = LatinGrammar::new();
    let chapters = document::convert(&grammar, text.lines());

    if chapters.is_empty() {
        tracing::warn!("no chapter headings found in {}", cli.input.display());
        return Ok(None);
    }

    // Render both artifacts before writing either, so a render failure
    // leaves nothing half-done on disk.
    let indent = cli.json_indent.unwrap_or(config.output.json_indent);
    let json = to_json_pretty(&chapters, indent).map_err(|source| AppError::Render {
        artifact: "json",
        source,
    })?;

    let script = if cli.no_script {
        None
    } else {
        let var_name = cli
            .var_name
            .clone()
            .unwrap_or_else(|| config.output.script_var.clone());
        let rendered = ScriptTemplate::new(var_name)
            .render(&chapters)
            .map_err(|source| AppError::Render {
                artifact: "script",
                source,
            })?;
        Some(rendered)
    };

    let mut artifacts = Vec::new();

    io::write_artifact(&cli.json, &json)?;
    artifacts.push(cli.json.clone());

    if let Some(script) = script {
        io::write_artifact(&cli.script, &script)?;
        artifacts.push(cli.script.clone());
    }

    let words: usize = chapters.iter().map(|c| c.words.len()).sum();
    tracing::info!(chapters = chapters.len(), words, "conversion finished");

    Ok(Some(Summary {
        chapters: chapters.len(),
        artifacts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use verba_config::output::OutputConfig;
    use verba_types::ChapterGroup;

    /// Fixed config so the tests are independent of VERBA_* variables.
    fn test_config() -> Config {
        Config {
            output: OutputConfig::default(),
            log_filter: "info".to_string(),
        }
    }

    const LIST: &str = "\
Latin I word list

CHAPTER ONE VOCABULARY
puella, puellae, f. - girl
puer (noun) - boy

CHAPTER TWO VOCABULARY
am\u{014d} - I love, verb
";

    fn cli_for(dir: &std::path::Path) -> Cli {
        let input = dir.join("words.txt");
        fs::write(&input, LIST).unwrap();
        Cli {
            input,
            json: dir.join("words.json"),
            script: dir.join("data.js"),
            no_script: false,
            var_name: None,
            json_indent: None,
        }
    }

    #[test]
    fn test_end_to_end_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path());

        let summary = run(&cli, &test_config()).unwrap().unwrap();
        assert_eq!(summary.chapters, 2);
        assert_eq!(summary.artifacts, vec![cli.json.clone(), cli.script.clone()]);

        let chapters: Vec<ChapterGroup> =
            serde_json::from_str(&fs::read_to_string(&cli.json).unwrap()).unwrap();
        assert_eq!(chapters[0].chapter, "Chapter 1");
        assert_eq!(chapters[0].words[0].gender, "f.");
        assert_eq!(chapters[1].words[0].latin, "am\u{014d}");

        let script = fs::read_to_string(&cli.script).unwrap();
        assert!(script.starts_with("var wordsData = ["));
        assert!(script.ends_with("];"));
        assert!(script.contains("am\\u014d"));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path());
        let config = test_config();

        run(&cli, &config).unwrap();
        let first_json = fs::read(&cli.json).unwrap();
        let first_script = fs::read(&cli.script).unwrap();

        run(&cli, &config).unwrap();
        assert_eq!(fs::read(&cli.json).unwrap(), first_json);
        assert_eq!(fs::read(&cli.script).unwrap(), first_script);
    }

    #[test]
    fn test_zero_headings_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.txt");
        fs::write(&input, "amō - I love, verb\npuer (noun) - boy\n").unwrap();
        let cli = Cli {
            input,
            json: dir.path().join("words.json"),
            script: dir.path().join("data.js"),
            no_script: false,
            var_name: None,
            json_indent: None,
        };

        let outcome = run(&cli, &test_config()).unwrap();
        assert!(outcome.is_none());
        assert!(!cli.json.exists());
        assert!(!cli.script.exists());
    }

    #[test]
    fn test_no_script_flag_skips_second_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_for(dir.path());
        cli.no_script = true;

        let summary = run(&cli, &test_config()).unwrap().unwrap();
        assert_eq!(summary.artifacts, vec![cli.json.clone()]);
        assert!(!cli.script.exists());
    }

    #[test]
    fn test_missing_input_maps_to_exit_code_two() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            input: dir.path().join("absent.txt"),
            json: dir.path().join("words.json"),
            script: dir.path().join("data.js"),
            no_script: false,
            var_name: None,
            json_indent: None,
        };

        let err = run(&cli, &test_config()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
