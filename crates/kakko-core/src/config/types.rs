//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [hook]
//! enabled = true
//! no_files_message = "No staged files to check"
//!
//! [git]
//! program = "/usr/local/bin/git"
//! ```

use serde::{Deserialize, Serialize};

/// Message reported to the user when nothing is staged.
pub const DEFAULT_NO_FILES_MESSAGE: &str = "No staged files to check";

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.kakko/config.toml`
/// 2. Project config: `./.kakko/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KakkoConfig {
    #[serde(default)]
    pub hook: HookConfig,

    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    /// Whether the Stop handler rewrites files at all.
    /// Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Message shown to the user when no files are staged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_files_message: Option<String>,
}

impl HookConfig {
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn no_files_message(&self) -> &str {
        self.no_files_message
            .as_deref()
            .unwrap_or(DEFAULT_NO_FILES_MESSAGE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// git executable used to list staged files.
    /// Default: "git"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

impl GitConfig {
    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or("git")
    }
}
