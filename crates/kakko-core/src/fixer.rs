//! Read-normalize-write over a list of candidate files.
//!
//! Each candidate is handled independently: a missing file is skipped, and a
//! file that cannot be read, decoded as UTF-8, or written back is skipped
//! without surfacing the error. Nothing here can fail the overall run.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::brackets;

/// What happened to one candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Full-width parentheses were replaced and the file rewritten.
    Fixed,
    /// The file was read but contained nothing to replace. No write happened.
    Unchanged,
    /// The path did not exist.
    Missing,
    /// Reading, decoding or writing failed. The file was left as it was on disk.
    Failed,
}

/// Aggregate result of one normalizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub candidates: usize,
    pub fixed: Vec<PathBuf>,
    pub unchanged: usize,
    pub missing: usize,
    pub failed: usize,
}

impl FixReport {
    /// Number of files rewritten.
    pub fn fixed_count(&self) -> usize {
        self.fixed.len()
    }

    fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.candidates += 1;
        match outcome {
            FileOutcome::Fixed => self.fixed.push(path),
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Missing => self.missing += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

/// Normalize one file in place.
///
/// Returns `Ok(true)` if the file was rewritten, `Ok(false)` if its content
/// had no full-width parentheses. Non-UTF-8 content is an
/// [`std::io::ErrorKind::InvalidData`] error.
pub fn fix_file(path: &Path) -> Result<bool, std::io::Error> {
    let content = std::fs::read_to_string(path)?;

    match brackets::normalize(&content) {
        Cow::Borrowed(_) => Ok(false),
        Cow::Owned(normalized) => {
            std::fs::write(path, normalized)?;
            Ok(true)
        }
    }
}

/// Resolve `candidate` against `root` and normalize it.
pub fn fix_candidate(root: &Path, candidate: &str) -> FileOutcome {
    let path = root.join(candidate);

    if !path.exists() {
        return FileOutcome::Missing;
    }

    match fix_file(&path) {
        Ok(true) => FileOutcome::Fixed,
        Ok(false) => FileOutcome::Unchanged,
        Err(_) => FileOutcome::Failed,
    }
}

/// Normalize every candidate in order, resolving each against `root`.
pub fn fix_candidates(root: &Path, candidates: &[String]) -> FixReport {
    let mut report = FixReport::default();

    for candidate in candidates {
        let outcome = fix_candidate(root, candidate);
        if outcome == FileOutcome::Fixed {
            info!(event = "core.fixer.file_fixed", path = %candidate);
        }
        report.record(PathBuf::from(candidate), outcome);
    }

    debug!(
        event = "core.fixer.run_completed",
        candidates = report.candidates,
        fixed = report.fixed_count(),
        unchanged = report.unchanged,
        missing = report.missing,
        failed = report.failed
    );

    report
}
