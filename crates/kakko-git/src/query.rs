//! Repository discovery helpers backed by git2.

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::errors::GitError;

/// Working tree root of the repository containing `path`.
///
/// Uses `Repository::discover` which traverses parent directories. Staged
/// names from `git diff --name-only` are relative to this directory, not to
/// `path`. A bare repository has no working tree and is reported as
/// [`GitError::NotInRepository`].
pub fn repo_workdir(path: &Path) -> Result<PathBuf, GitError> {
    let repo = match Repository::discover(path) {
        Ok(repo) => repo,
        Err(e) if e.code() == git2::ErrorCode::NotFound => return Err(GitError::NotInRepository),
        Err(e) => return Err(GitError::Git2Error { source: e }),
    };

    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or(GitError::NotInRepository)
}
