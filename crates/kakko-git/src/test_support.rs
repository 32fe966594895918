//! Test helpers for creating git repositories with a populated index.
//!
//! These functions wrap git2 operations so test code in other crates
//! doesn't need to import git2 directly.

use std::path::Path;

use git2::Repository;

use crate::errors::GitError;

/// Initialize a new git repository at the given path with an initial commit.
pub fn init_repo_with_commit(path: &Path) -> Result<(), GitError> {
    let repo = Repository::init(path)?;
    let sig = match repo.signature() {
        Ok(sig) => sig,
        Err(_) => git2::Signature::now("Test", "test@test.com")?,
    };
    let tree_id = repo.index()?.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;
    Ok(())
}

/// Write `content` to `relative` inside the repository and add it to the index.
///
/// Parent directories are created as needed. The file is staged but not committed.
pub fn stage_file(repo_path: &Path, relative: &str, content: &str) -> Result<(), GitError> {
    let full = repo_path.join(relative);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&full, content)?;

    let repo = Repository::open(repo_path)?;
    let mut index = repo.index()?;
    index.add_path(Path::new(relative))?;
    index.write()?;
    Ok(())
}
