use crate::error::{Error, Result};
use crate::loader::git::GitLoader;
use std::path::{Path, PathBuf};

pub mod git;

#[derive(Debug, PartialEq)]
pub enum TemplateSource {
    /// Repository on the local filesystem
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    pub fn from_string(s: &str) -> Self {
        if GitLoader::<&str>::is_git_url(s) {
            TemplateSource::Git(s.to_string())
        } else {
            TemplateSource::FileSystem(PathBuf::from(s))
        }
    }
}

/// Clones the template repository `repo` into `dest`.
///
/// Remote repositories are fetched with depth 1; local ones are cloned in
/// full because libgit2's local transport cannot fetch shallow.
pub fn clone_template<P: AsRef<Path>>(repo: &str, dest: P) -> Result<PathBuf> {
    let source = TemplateSource::from_string(repo);
    log::debug!("Template source: {source}");

    match source {
        TemplateSource::Git(url) => GitLoader::new(url, dest).shallow(1).load(),
        TemplateSource::FileSystem(path) => {
            if !path.exists() {
                return Err(Error::TemplateDoesNotExistsError {
                    template: path.display().to_string(),
                });
            }
            GitLoader::new(path.to_string_lossy(), dest).load()
        }
    }
}
