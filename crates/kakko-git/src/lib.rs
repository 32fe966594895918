//! # kakko-git
//!
//! Git queries for kakko. The staged-file listing shells out to the `git` CLI
//! so it sees exactly what the user's own `git diff --cached` would report;
//! git2 is only used for repository discovery and by the test helpers.

pub mod cli;
pub mod errors;
pub mod query;
pub mod test_support;

pub use cli::{GitCli, StagedQuery, list_staged_files, parse_name_only};
pub use errors::GitError;
pub use query::repo_workdir;
