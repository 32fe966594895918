use std::error::Error;

/// Base trait for all application errors
pub trait KakkoError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

impl KakkoError for kakko_git::GitError {
    fn error_code(&self) -> &'static str {
        match self {
            kakko_git::GitError::NotInRepository => "NOT_IN_REPOSITORY",
            kakko_git::GitError::SpawnFailed { .. } => "GIT_SPAWN_FAILED",
            kakko_git::GitError::ListingFailed { .. } => "GIT_LISTING_FAILED",
            kakko_git::GitError::Git2Error { .. } => "GIT2_ERROR",
            kakko_git::GitError::IoError { .. } => "GIT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            kakko_git::GitError::NotInRepository | kakko_git::GitError::SpawnFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_error_codes() {
        let error = kakko_git::GitError::SpawnFailed {
            program: "git".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(error.error_code(), "GIT_SPAWN_FAILED");
        assert!(error.is_user_error());

        let error = kakko_git::GitError::ListingFailed {
            program: "git".to_string(),
            code: Some(128),
        };
        assert_eq!(error.error_code(), "GIT_LISTING_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_not_in_repository_is_user_error() {
        let error = kakko_git::GitError::NotInRepository;
        assert_eq!(error.error_code(), "NOT_IN_REPOSITORY");
        assert!(error.is_user_error());
    }
}
