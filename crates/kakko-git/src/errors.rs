#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Not in a git repository")]
    NotInRepository,

    #[error("Failed to execute '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error(
        "'{program} diff --name-only --cached' failed (exit {})",
        code.map_or_else(|| "signal".to_string(), |c| c.to_string())
    )]
    ListingFailed { program: String, code: Option<i32> },

    #[error("Git2 library error: {source}")]
    Git2Error {
        #[from]
        source: git2::Error,
    },

    #[error("IO error during git operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
