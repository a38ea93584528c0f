use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Clones a template repository into the project directory.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
    dest: PathBuf,
    depth: Option<i32>,
}

impl<S: AsRef<str>> GitLoader<S> {
    /// Creates a loader that fetches the full history.
    pub fn new<P: AsRef<Path>>(repo: S, dest: P) -> Self {
        Self { repo, dest: dest.as_ref().to_path_buf(), depth: None }
    }

    /// Limits the fetch to the latest `depth` commits.
    pub fn shallow(mut self, depth: i32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Determines if a string represents a git repository URL.
    ///
    /// Supports:
    /// - HTTPS URLs: https://github.com/user/repo
    /// - Git URLs: git://github.com/user/repo
    /// - SSH URLs: git@github.com:user/repo
    /// - SSH URLs with explicit protocol: ssh://git@github.com/user/repo
    pub fn is_git_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            return matches!(url.scheme(), "http" | "https" | "git" | "ssh");
        }

        // scp-like syntax: user@host:path
        if s.contains('@') && s.contains(':') && !s.contains("://") {
            if let (Some(at_pos), Some(colon_pos)) = (s.find('@'), s.rfind(':')) {
                if colon_pos > at_pos {
                    let user_part = &s[..at_pos];
                    let host_part = &s[at_pos + 1..colon_pos];
                    let path_part = &s[colon_pos + 1..];

                    return !user_part.is_empty()
                        && !host_part.is_empty()
                        && host_part.contains('.')
                        && path_part.contains('/');
                }
            }
        }

        false
    }

    /// Clones the repository and returns the path of the working tree.
    pub fn load(&self) -> Result<PathBuf> {
        let repo_url = self.repo.as_ref();
        log::debug!("Cloning '{}' to '{}'", repo_url, self.dest.display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);
        if let Some(depth) = self.depth {
            fetch_opts.depth(depth);
        }

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        match builder.clone(repo_url, &self.dest) {
            Ok(_) => Ok(self.dest.clone()),
            Err(e) => Err(Error::Git2Error(e)),
        }
    }
}
