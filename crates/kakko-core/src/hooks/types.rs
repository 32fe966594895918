use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::HookError;

/// Lifecycle events a coding-assistant host can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEvent {
    Stop,
    SubagentStop,
    Notification,
    PreToolUse,
    PostToolUse,
    UserPromptSubmit,
    SessionStart,
    SessionEnd,
    PreCompact,
}

impl HookEvent {
    pub const ALL: [HookEvent; 9] = [
        HookEvent::Stop,
        HookEvent::SubagentStop,
        HookEvent::Notification,
        HookEvent::PreToolUse,
        HookEvent::PostToolUse,
        HookEvent::UserPromptSubmit,
        HookEvent::SessionStart,
        HookEvent::SessionEnd,
        HookEvent::PreCompact,
    ];

    /// Name as the host spells it in settings and in `hook_event_name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::Stop => "Stop",
            HookEvent::SubagentStop => "SubagentStop",
            HookEvent::Notification => "Notification",
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::UserPromptSubmit => "UserPromptSubmit",
            HookEvent::SessionStart => "SessionStart",
            HookEvent::SessionEnd => "SessionEnd",
            HookEvent::PreCompact => "PreCompact",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `Stop`, `stop`, `subagent-stop`, `subagent_stop`, `SubagentStop`...
impl FromStr for HookEvent {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        HookEvent::ALL
            .into_iter()
            .find(|event| event.as_str().to_lowercase() == folded)
            .ok_or_else(|| HookError::UnknownEvent {
                name: s.to_string(),
            })
    }
}

/// JSON object the host writes to the hook's stdin.
///
/// Every field is optional and unknown fields are ignored, so the hook keeps
/// working when the host adds to its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_event_name: Option<String>,

    /// Set by the host when a Stop hook already asked the assistant to continue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_hook_active: Option<bool>,
}

/// Result reported back to the host.
///
/// Success is the only outcome: hooks never block or fail the host's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Success { message_for_user: Option<String> },
}

impl HookOutcome {
    pub fn success() -> Self {
        HookOutcome::Success {
            message_for_user: None,
        }
    }

    pub fn success_with_message(message: impl Into<String>) -> Self {
        HookOutcome::Success {
            message_for_user: Some(message.into()),
        }
    }

    pub fn message_for_user(&self) -> Option<&str> {
        match self {
            HookOutcome::Success { message_for_user } => message_for_user.as_deref(),
        }
    }
}
