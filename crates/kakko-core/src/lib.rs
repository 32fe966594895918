//! kakko-core: Core library for full-width parenthesis normalization
//!
//! Rewrites full-width parentheses (`（` U+FF08, `）` U+FF09) in staged files
//! to their ASCII forms when a coding assistant finishes a turn.
//!
//! # Main Entry Points
//!
//! - [`brackets`] - The character substitution itself
//! - [`fixer`] - Per-file read, normalize, write-back
//! - [`hooks`] - Hook events, handlers, registry and the stdin/stdout runner
//! - [`config`] - Configuration management
//! - [`integrations`] - Registering the hook with Claude Code

pub mod brackets;
pub mod config;
pub mod errors;
pub mod events;
pub mod fixer;
pub mod hooks;
pub mod integrations;
pub mod logging;

pub use config::{ConfigError, GitConfig, HookConfig, KakkoConfig};
pub use errors::KakkoError;
pub use fixer::{FileOutcome, FixReport};
pub use hooks::{
    HookContext, HookError, HookEvent, HookHandler, HookInput, HookOutcome, HookRegistry,
};

// Re-export logging initialization
pub use logging::init_logging;
