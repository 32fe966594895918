//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.kakko/config.toml` (global user preferences)
//! 3. **Project config** - `./.kakko/config.toml` (project-specific overrides)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::ConfigError;
use super::types::{GitConfig, HookConfig, KakkoConfig};

const CONFIG_DIR: &str = ".kakko";
const CONFIG_FILE: &str = "config.toml";

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

fn is_file_not_found(e: &ConfigError) -> bool {
    matches!(e, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
}

/// Load configuration from the user and project config files.
///
/// Missing config files are not errors. A missing home directory skips the
/// user layer.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if the merged configuration fails validation.
pub fn load_hierarchy() -> Result<KakkoConfig, ConfigError> {
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(user_config_path().as_deref(), &project_root)
}

/// Load the hierarchy from an explicit user config path and project root.
pub fn load_hierarchy_from(
    user_config: Option<&Path>,
    project_root: &Path,
) -> Result<KakkoConfig, ConfigError> {
    let mut config = KakkoConfig::default();

    if let Some(path) = user_config {
        match load_config_file(path) {
            Ok(user_config) => config = merge_configs(config, user_config),
            Err(e) if !is_file_not_found(&e) => return Err(e),
            Err(_) => {} // File not found - continue with defaults
        }
    }

    match load_config_file(&project_config_path(project_root)) {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(&e) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    validate_config(&config)?;

    debug!(event = "core.config.load_completed", config = ?config);

    Ok(config)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<KakkoConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: KakkoConfig, override_config: KakkoConfig) -> KakkoConfig {
    KakkoConfig {
        hook: HookConfig {
            enabled: override_config.hook.enabled.or(base.hook.enabled),
            no_files_message: override_config
                .hook
                .no_files_message
                .or(base.hook.no_files_message),
        },
        git: GitConfig {
            program: override_config.git.program.or(base.git.program),
        },
    }
}

/// Validate a KakkoConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `git.program`, if set, must not be blank
pub fn validate_config(config: &KakkoConfig) -> Result<(), ConfigError> {
    if let Some(ref program) = config.git.program
        && program.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "git.program must not be empty".to_string(),
        });
    }

    Ok(())
}
