//! Hook error types.

use crate::errors::KakkoError;

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Failed to list staged files: {source}")]
    Git {
        #[from]
        source: kakko_git::GitError,
    },

    #[error("Unknown hook event '{name}'")]
    UnknownEvent { name: String },

    #[error("Failed to parse hook input: {message}")]
    InputParse { message: String },
}

impl KakkoError for HookError {
    fn error_code(&self) -> &'static str {
        match self {
            HookError::Git { .. } => "HOOK_GIT_FAILED",
            HookError::UnknownEvent { .. } => "HOOK_UNKNOWN_EVENT",
            HookError::InputParse { .. } => "HOOK_INPUT_PARSE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            HookError::Git { source } => source.is_user_error(),
            HookError::UnknownEvent { .. } => true,
            HookError::InputParse { .. } => false,
        }
    }
}
