use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::KakkoError;

/// Command Claude Code runs on the Stop event.
pub const STOP_HOOK_COMMAND: &str = "kakko hook stop";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Home directory not found; cannot locate Claude Code user settings")]
    HomeNotFound,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}. Fix the JSON syntax or remove the file to reset", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unexpected settings.json layout: {message}")]
    InvalidShape { message: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl KakkoError for SettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            SettingsError::HomeNotFound => "SETTINGS_HOME_NOT_FOUND",
            SettingsError::Read { .. } => "SETTINGS_READ_FAILED",
            SettingsError::Parse { .. } => "SETTINGS_PARSE_FAILED",
            SettingsError::InvalidShape { .. } => "SETTINGS_INVALID_SHAPE",
            SettingsError::Write { .. } => "SETTINGS_WRITE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SettingsError::Parse { .. } | SettingsError::InvalidShape { .. }
        )
    }
}

/// Whether [`ensure_stop_hook`] had to change the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPatch {
    Added,
    AlreadyConfigured,
}

/// `<project>/.claude/settings.json`
pub fn project_settings_path(project_root: &Path) -> PathBuf {
    project_root.join(".claude").join("settings.json")
}

/// `~/.claude/settings.json`
pub fn user_settings_path() -> Result<PathBuf, SettingsError> {
    let home = dirs::home_dir().ok_or(SettingsError::HomeNotFound)?;
    Ok(home.join(".claude").join("settings.json"))
}

/// Ensure a Claude Code settings file runs `command` on the Stop event.
///
/// Adds `{"hooks": [{"type": "command", "command": <command>}]}` to the
/// `hooks.Stop` array. Preserves all existing settings and hooks. Creates the
/// file (and its directory) if missing. Idempotent: skips if any Stop hook
/// already runs the same command.
pub fn ensure_stop_hook(settings_path: &Path, command: &str) -> Result<SettingsPatch, SettingsError> {
    let mut settings: serde_json::Value = if settings_path.exists() {
        let content =
            std::fs::read_to_string(settings_path).map_err(|source| SettingsError::Read {
                path: settings_path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
            path: settings_path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::json!({})
    };

    let hooks = settings
        .as_object_mut()
        .ok_or_else(|| SettingsError::InvalidShape {
            message: "settings.json root is not an object".to_string(),
        })?
        .entry("hooks")
        .or_insert_with(|| serde_json::json!({}));

    let stop_entries = hooks
        .as_object_mut()
        .ok_or_else(|| SettingsError::InvalidShape {
            message: "\"hooks\" field is not an object".to_string(),
        })?
        .entry("Stop")
        .or_insert_with(|| serde_json::json!([]));

    let stop_entries = stop_entries
        .as_array_mut()
        .ok_or_else(|| SettingsError::InvalidShape {
            message: "\"hooks.Stop\" field is not an array".to_string(),
        })?;

    let already_registered = stop_entries.iter().any(|entry| {
        entry
            .get("hooks")
            .and_then(|hooks| hooks.as_array())
            .is_some_and(|hook_list| {
                hook_list
                    .iter()
                    .any(|h| h.get("command").and_then(|c| c.as_str()) == Some(command))
            })
    });

    if already_registered {
        info!(
            event = "core.integration.claude_settings_already_configured",
            path = %settings_path.display()
        );
        return Ok(SettingsPatch::AlreadyConfigured);
    }

    stop_entries.push(serde_json::json!({
        "hooks": [{
            "type": "command",
            "command": command
        }]
    }));

    if let Some(parent) = settings_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(&settings).map_err(|e| {
        SettingsError::InvalidShape {
            message: format!("failed to serialize settings.json: {}", e),
        }
    })?;

    std::fs::write(settings_path, format!("{}\n", content)).map_err(|source| {
        SettingsError::Write {
            path: settings_path.to_path_buf(),
            source,
        }
    })?;

    info!(
        event = "core.integration.claude_settings_patched",
        path = %settings_path.display()
    );

    Ok(SettingsPatch::Added)
}
