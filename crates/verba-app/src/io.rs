use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read the whole input file, telling missing, unreadable, and
/// undecodable inputs apart.
pub fn read_input(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::InputMissing(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| AppError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| AppError::InputDecode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_artifact(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
