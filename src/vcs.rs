use std::fs;
use std::path::Path;

use git2::{IndexAddOption, Oid, Repository, Signature};

use crate::error::Result;

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
const FALLBACK_AUTHOR: (&str, &str) = ("este", "este@localhost");

/// Replaces the cloned history with a fresh repository holding a single
/// commit of the current working tree.
pub fn reinitialize<P: AsRef<Path>>(project_dir: P) -> Result<Oid> {
    let project_dir = project_dir.as_ref();
    let git_dir = project_dir.join(".git");

    if git_dir.exists() {
        log::debug!("Removing '{}'", git_dir.display());
        fs::remove_dir_all(&git_dir)?;
    }

    let repo = Repository::init(project_dir)?;
    initial_commit(&repo)
}

/// Stages every file and commits it on the unborn HEAD branch.
pub fn initial_commit(repo: &Repository) -> Result<Oid> {
    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    // Without user.name/user.email configured libgit2 has no signature.
    let signature = match repo.signature() {
        Ok(signature) => signature,
        Err(e) => {
            log::debug!("No git identity configured ({e}), using fallback author");
            Signature::now(FALLBACK_AUTHOR.0, FALLBACK_AUTHOR.1)?
        }
    };

    let oid =
        repo.commit(Some("HEAD"), &signature, &signature, INITIAL_COMMIT_MESSAGE, &tree, &[])?;
    log::debug!("Created initial commit {oid}");
    Ok(oid)
}
