use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Fatal conditions at the conversion boundary. Each variant carries the
/// offending path or artifact and maps to its own exit code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("input file not found: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("unable to read input file {}: {source}", .path.display())]
    InputRead { path: PathBuf, source: io::Error },

    #[error("input file {} is not valid UTF-8: {source}", .path.display())]
    InputDecode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    #[error("unable to render the {artifact} artifact: {source}")]
    Render {
        artifact: &'static str,
        source: anyhow::Error,
    },

    #[error("unable to write output file {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InputMissing(_) => 2,
            AppError::InputRead { .. } => 3,
            AppError::InputDecode { .. } => 4,
            AppError::Render { .. } => 5,
            AppError::OutputWrite { .. } => 6,
        }
    }
}
