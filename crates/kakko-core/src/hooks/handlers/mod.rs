//! Built-in hook handlers.

pub mod fix_brackets;

pub use fix_brackets::{FixBracketsHook, GitIndexSource, StagedFileSource};
