use std::path::{Path, PathBuf};

use super::types::{HookInput, HookOutcome};
use crate::config::KakkoConfig;

/// What a handler sees when it runs.
#[derive(Debug, Clone)]
pub struct HookContext {
    input: HookInput,
    cwd: PathBuf,
    config: KakkoConfig,
}

impl HookContext {
    /// `cwd` is the directory staged paths are resolved against.
    pub fn new(input: HookInput, cwd: PathBuf, config: KakkoConfig) -> Self {
        Self { input, cwd, config }
    }

    pub fn input(&self) -> &HookInput {
        &self.input
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn config(&self) -> &KakkoConfig {
        &self.config
    }

    pub fn success(&self) -> HookOutcome {
        HookOutcome::success()
    }

    pub fn success_with_message(&self, message: impl Into<String>) -> HookOutcome {
        HookOutcome::success_with_message(message)
    }
}
