//! Staged-file listing through the git CLI.
//!
//! The listing runs `git diff --name-only --cached` and buffers its whole
//! stdout before returning. stderr is discarded; the exit code alone decides
//! whether the output is trusted. Names that are not valid UTF-8 are decoded
//! lossily, so they no longer match a file on disk and get skipped later.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use super::errors::GitError;

/// Result of asking git for the staged file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedQuery {
    /// git exited zero. Names are relative to the repository working tree,
    /// trimmed, with empty lines removed.
    Files(Vec<String>),
    /// git ran but exited non-zero (`code` is `None` when killed by a signal).
    Failed { code: Option<i32> },
}

/// Split `git diff --name-only` output into candidate paths.
///
/// Order is preserved and duplicates are kept.
pub fn parse_name_only(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Handle on the git executable used for staged-file queries.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// List files staged in the index of the repository containing `dir`.
    ///
    /// A non-zero exit is reported as [`StagedQuery::Failed`], not as an
    /// error. Only a failure to run git at all returns `Err`.
    pub fn staged_files(&self, dir: &Path) -> Result<StagedQuery, GitError> {
        info!(
            event = "core.git.staged_list_started",
            program = %self.program,
            path = %dir.display()
        );

        let output = Command::new(&self.program)
            .current_dir(dir)
            .args(["diff", "--name-only", "--cached"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| GitError::SpawnFailed {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let code = output.status.code();
            warn!(
                event = "core.git.staged_list_failed",
                path = %dir.display(),
                code = ?code
            );
            return Ok(StagedQuery::Failed { code });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let files = parse_name_only(&stdout);

        debug!(event = "core.git.staged_list_parsed", files = ?files);
        info!(
            event = "core.git.staged_list_completed",
            path = %dir.display(),
            count = files.len()
        );

        Ok(StagedQuery::Files(files))
    }
}

/// List staged files with the `git` found on `PATH`.
pub fn list_staged_files(dir: &Path) -> Result<StagedQuery, GitError> {
    GitCli::default().staged_files(dir)
}
