use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves where a new project goes: `dest` if given, `./<name>` otherwise.
pub fn get_project_dir<P: AsRef<Path>>(name: &str, dest: Option<P>) -> PathBuf {
    match dest {
        Some(dest) => dest.as_ref().to_path_buf(),
        None => PathBuf::from(".").join(name),
    }
}

/// Makes sure scaffolding never writes into an existing folder.
pub fn ensure_empty_folder<P: AsRef<Path>>(folder: P) -> Result<PathBuf> {
    let folder = folder.as_ref();
    if folder.exists() {
        return Err(Error::DestinationExistsError { dest: folder.display().to_string() });
    }
    Ok(folder.to_path_buf())
}
